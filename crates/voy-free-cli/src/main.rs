//! `voy-free` CLI — find the earliest free slot in a Voy task snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # Tasks from a file, clock read in UTC
//! voy-free -i tasks.json --duration 60
//!
//! # Tasks from stdin, fixed "now"
//! cat tasks.json | voy-free -d 30 --now "2026-03-02 08:00"
//!
//! # Read the clock in a specific timezone (or set VOY_TIMEZONE)
//! voy-free -i tasks.json -d 45 --timezone Asia/Singapore
//!
//! # Machine-readable output
//! voy-free -i tasks.json -d 90 --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use voy_availability::{
    find_free_time_with_clock, format_datetime_compact, format_slot, parse_datetime, parse_tasks,
    Clock, FixedClock, SearchResult, Task, ZonedClock,
};

#[derive(Parser)]
#[command(
    name = "voy-free",
    version,
    about = "Find the earliest free slot (09:00-22:00) in the next 7 days"
)]
struct Cli {
    /// Task snapshot as a JSON array (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Required slot length in minutes
    #[arg(short, long, allow_negative_numbers = true)]
    duration: i64,

    /// Use this moment as "now" (yyyy-MM-dd HH:mm) instead of the system clock
    #[arg(long)]
    now: Option<String>,

    /// IANA timezone the system clock is read in (ignored with --now)
    #[arg(long, env = "VOY_TIMEZONE", default_value = "UTC")]
    timezone: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log every examined day to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonOutput {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_minutes: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let raw = read_input(cli.input.as_deref())?;
    let tasks = load_tasks(&raw)?;

    let clock: Box<dyn Clock> = match cli.now.as_deref() {
        Some(now) => Box::new(FixedClock(parse_datetime(now).context("Invalid --now value")?)),
        None => Box::new(ZonedClock::new(&cli.timezone).context("Invalid --timezone value")?),
    };

    tracing::debug!(
        tasks = tasks.len(),
        duration_minutes = cli.duration,
        "searching for free slot"
    );
    let result = find_free_time_with_clock(&tasks, cli.duration, clock.as_ref());

    if cli.json {
        println!("{}", serde_json::to_string(&json_output(result, cli.duration))?);
    } else {
        match result.slot_start() {
            Some(start) => println!("Free slot found: {}", format_slot(start, cli.duration)),
            None => println!("No free slot found."),
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("voy_availability=debug,voy_free=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("voy_availability=warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Blank input is an empty task list.
fn load_tasks(raw: &str) -> Result<Vec<Task>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_tasks(raw).context("Failed to load tasks")
}

fn json_output(result: SearchResult, duration_minutes: i64) -> JsonOutput {
    match result.slot(duration_minutes) {
        Some(slot) => JsonOutput {
            found: true,
            start: Some(format_datetime_compact(slot.start)),
            end: Some(format_datetime_compact(slot.end)),
            duration_minutes: Some(slot.duration_minutes),
        },
        None => JsonOutput {
            found: false,
            start: None,
            end: None,
            duration_minutes: None,
        },
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
