//! `slotwise` CLI — find and plan calendar slots from the command line.
//!
//! A non-interactive driver for the scheduling engine: busy intervals come
//! in as part of a JSON document (fetched upstream by whatever owns the
//! calendar), ranked candidates and booking plans come out on stdout. No
//! calendar I/O happens here.
//!
//! ## Usage
//!
//! ```sh
//! # Rank free slots for a scheduling request (stdin → stdout)
//! slotwise find < request.json
//!
//! # Same, from a file, machine-readable, top 3 only
//! slotwise find -i request.json --json --limit 3
//!
//! # Turn a chosen slot into a booking plan (main event + buffer events)
//! slotwise plan -i plan.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slotwise_core::{
    expand_recurring, find_slots, parse_instant, BookingPlan, BusyInterval, RecurringBusy,
    SchedulingRequest,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "slotwise", version, about = "Calendar slot finding and ranking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank free slots for a scheduling request document
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the ranked slots as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Maximum number of candidates to print
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Build the booking plan for a chosen slot
    Plan {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Input document for `find`: the request plus the busy data fetched by the
/// calendar-access collaborator.
#[derive(Deserialize)]
struct FindDocument {
    request: SchedulingRequest,
    #[serde(default)]
    busy: Vec<BusyInterval>,
    #[serde(default)]
    recurring_busy: Vec<RecurringBusy>,
}

/// Input document for `plan`: the original request, the chosen slot start,
/// and the event title. The slot start may be naive (assumed UTC) or carry
/// an explicit offset.
#[derive(Deserialize)]
struct PlanDocument {
    request: SchedulingRequest,
    title: String,
    slot_start: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find { input, json, limit } => {
            let raw = read_input(input.as_deref())?;
            let doc: FindDocument =
                serde_json::from_str(&raw).context("Failed to parse the scheduling document")?;

            let mut busy = doc.busy;
            for pattern in &doc.recurring_busy {
                let expanded = expand_recurring(pattern, &doc.request.window).with_context(|| {
                    format!(
                        "Failed to expand recurring pattern for calendar '{}'",
                        pattern.calendar_id
                    )
                })?;
                busy.extend(expanded);
            }

            let ranked = find_slots(&doc.request, &busy).context("Slot search failed")?;
            let top = &ranked[..ranked.len().min(limit)];

            if json {
                println!("{}", serde_json::to_string_pretty(top)?);
            } else if top.is_empty() {
                println!("No available slots found.");
            } else {
                for (i, slot) in top.iter().enumerate() {
                    let start = slot.interval.start.with_timezone(&doc.request.timezone);
                    let end = slot.interval.end.with_timezone(&doc.request.timezone);
                    println!(
                        "{}. {} - {}  (score {:.2})",
                        i + 1,
                        start.format("%a %b %d %H:%M"),
                        end.format("%H:%M"),
                        slot.score
                    );
                }
            }
        }
        Commands::Plan { input } => {
            let raw = read_input(input.as_deref())?;
            let doc: PlanDocument =
                serde_json::from_str(&raw).context("Failed to parse the plan document")?;

            doc.request
                .validate()
                .context("Invalid scheduling request")?;
            let slot_start = parse_instant(&doc.slot_start)
                .with_context(|| format!("Invalid slot start: {}", doc.slot_start))?;

            let plan = BookingPlan::build(&doc.request, &doc.title, slot_start);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
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
