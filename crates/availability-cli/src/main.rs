//! `avail` CLI — check classroom availability against a JSON room list.
//!
//! ## Usage
//!
//! ```sh
//! # Rooms free on Monday 10:00-11:00 (room list on stdin)
//! cat rooms.json | avail check --day Monday --start 10:00 --end 11:00
//!
//! # Same, from file to file
//! avail check -i rooms.json -o free.json --day monday --start 10:00 --end 11:00
//!
//! # Busy/free breakdown of one room
//! avail free -i rooms.json --room A101 --day Monday --start 08:00 --end 18:00
//!
//! # Validate a room list before seeding the server with it
//! avail validate -i rooms.json
//! ```
//!
//! The room list is a JSON array of objects with `name` (or `roomNumber`) and
//! `busyIntervals` (or `occupiedSlots`) of `{day, start, end}`.

use anyhow::{Context, Result};
use availability_engine::{
    find_available, resource_availability, InMemoryStore, NewResource, Query, Resource, ResourceRecord,
};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "avail", version, about = "Classroom availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the rooms free for a weekday and time window
    Check {
        #[command(flatten)]
        window: WindowArgs,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print only room names, one per line
        #[arg(long)]
        names_only: bool,
    },
    /// Show busy blocks and free slots of one room
    Free {
        /// Room name (e.g. A101)
        #[arg(long)]
        room: String,
        #[command(flatten)]
        window: WindowArgs,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Validate a room list
    Validate {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Left optional so that missing values get the same error as the HTTP API.
#[derive(Args)]
struct WindowArgs {
    /// Weekday, e.g. Monday
    #[arg(long)]
    day: Option<String>,
    /// Window start, HH:MM
    #[arg(long, alias = "start-time")]
    start: Option<String>,
    /// Window end, HH:MM
    #[arg(long, alias = "end-time")]
    end: Option<String>,
}

impl WindowArgs {
    fn to_query(&self) -> Result<Query> {
        Query::parse(self.day.as_deref(), self.start.as_deref(), self.end.as_deref())
            .context("Invalid availability window")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            window,
            input,
            output,
            names_only,
        } => {
            // Validate the window before reading any input.
            let query = window.to_query()?;
            let rooms = read_rooms(input.as_deref())?;

            let available = find_available(&rooms, &query);

            let rendered = if names_only {
                available
                    .iter()
                    .map(|r| format!("{}\n", r.name))
                    .collect::<String>()
            } else {
                serde_json::to_string_pretty(&available)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Free {
            room,
            window,
            input,
        } => {
            let query = window.to_query()?;
            let rooms = read_rooms(input.as_deref())?;

            let resource = rooms
                .iter()
                .find(|r| r.name == room)
                .with_context(|| format!("Room not found: {}", room))?;

            let breakdown = resource_availability(resource, &query);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        Commands::Validate { input } => {
            let records = read_records(input.as_deref())?;
            let count = records.len();
            let intervals: usize = records.iter().map(|r| r.busy_intervals.len()).sum();

            // Same uniqueness rules the server applies when seeding.
            InMemoryStore::seeded(records).context("Room list contains duplicate rooms")?;
            println!("{} rooms, {} busy intervals: OK", count, intervals);
        }
    }

    Ok(())
}

/// Read a room list, validating every record.
fn read_records(path: Option<&str>) -> Result<Vec<NewResource>> {
    let json = read_input(path)?;
    let records: Vec<ResourceRecord> =
        serde_json::from_str(&json).context("Input is not a JSON array of rooms")?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            NewResource::try_from(record).with_context(|| format!("Invalid room #{}", index + 1))
        })
        .collect()
}

/// Rooms without an id get a fresh one.
fn read_rooms(path: Option<&str>) -> Result<Vec<Resource>> {
    Ok(read_records(path)?
        .into_iter()
        .map(NewResource::into_resource)
        .collect())
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
