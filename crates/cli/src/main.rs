// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # workcal
//!
//! Queries and edits a JSON calendar document.
//!
//! - `workcal init` creates an empty document
//! - `workcal capacity Base 2026-12-25` prints the hours available on a date
//! - `workcal apply edits.json` applies a batch of commands, all or nothing
//!
//! The document path comes from `--file` or `WORKCAL_FILE`.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod store;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use time::Date;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use workcal::{BatchResult, Calendar, CalendarRegistry, apply_all};
use workcal_domain::{CalendarId, CalendarVersion, DayType, WEEK, parse_date, weekday_name};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Work-hour calendars with versions and inheritance
#[derive(Debug, Parser)]
#[command(name = "workcal", author, version, about, long_about = None)]
struct Args {
    /// Path to the calendar document
    #[arg(
        short,
        long,
        env = "WORKCAL_FILE",
        default_value = "calendars.json",
        global = true
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run(&self.file)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Create an empty calendar document
    Init {
        /// Replace an existing document
        #[arg(long)]
        force: bool,
    },

    /// Print the hours available on a date
    #[command(visible_alias = "cap")]
    Capacity {
        /// Calendar name
        calendar: String,
        /// Date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: Date,
    },

    /// Print how a date is classified
    Classify {
        /// Calendar name
        calendar: String,
        /// Date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: Date,
    },

    /// Sum the hours of an inclusive date range
    Hours {
        /// Calendar name
        calendar: String,
        /// First date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        start: Date,
        /// Last date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        end: Date,
    },

    /// Sum the hours of the Monday-to-Sunday week containing a date
    Week {
        /// Calendar name
        calendar: String,
        /// Any date in the week (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: Date,
    },

    /// List the dates without working hours in an inclusive range
    #[command(visible_alias = "nw")]
    NonWorkable {
        /// Calendar name
        calendar: String,
        /// First date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        start: Date,
        /// Last date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        end: Date,
    },

    /// Show the version chain of a calendar
    Versions {
        /// Calendar name
        calendar: String,
    },

    /// Apply a JSON array of commands to the document
    Apply {
        /// Path to the command file
        commands: PathBuf,
        /// Validate the batch without writing the result
        #[arg(long)]
        dry_run: bool,
    },
}

impl Command {
    fn run(self, file: &Path) -> Result<()> {
        match self {
            Self::Init { force } => store::init(file, force),
            Self::Apply { commands, dry_run } => apply_commands(file, &commands, dry_run),
            query => {
                let registry: CalendarRegistry = store::load(file)?;
                query.query(&registry)
            }
        }
    }

    fn query(self, registry: &CalendarRegistry) -> Result<()> {
        match self {
            Self::Capacity { calendar, date } => {
                let id: CalendarId = registry.id_of(&calendar)?;
                println!("{}", registry.capacity_at(id, date)?);
            }
            Self::Classify { calendar, date } => {
                let id: CalendarId = registry.id_of(&calendar)?;
                let day_type: DayType = registry.classify(id, date)?;
                println!("{day_type}");
            }
            Self::Hours {
                calendar,
                start,
                end,
            } => {
                let id: CalendarId = registry.id_of(&calendar)?;
                println!("{}", registry.workable_hours(id, start, end)?);
            }
            Self::Week { calendar, date } => {
                let id: CalendarId = registry.id_of(&calendar)?;
                println!("{}", registry.workable_hours_per_week(id, date)?);
            }
            Self::NonWorkable {
                calendar,
                start,
                end,
            } => {
                let id: CalendarId = registry.id_of(&calendar)?;
                let days: BTreeSet<Date> = registry.non_workable_days(id, start, end)?;
                for day in days {
                    println!("{day}");
                }
            }
            Self::Versions { calendar } => {
                let calendar: &Calendar = registry.find_by_name(&calendar)?;
                for line in describe_versions(registry, calendar) {
                    println!("{line}");
                }
            }
            Self::Init { .. } | Self::Apply { .. } => {}
        }
        Ok(())
    }
}

fn apply_commands(file: &Path, commands: &Path, dry_run: bool) -> Result<()> {
    let registry: CalendarRegistry = store::load(file)?;
    let batch: BatchResult = apply_all(&registry, store::load_commands(commands)?)?;
    for action in &batch.actions {
        info!("{action}");
    }
    if dry_run {
        info!(commands = batch.actions.len(), "Dry run, nothing written");
        return Ok(());
    }
    store::save(file, &batch.new_state)
}

/// Renders one line per version followed by its weekday table and own
/// exceptions.
fn describe_versions(registry: &CalendarRegistry, calendar: &Calendar) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for (index, version) in calendar.versions().iter().enumerate() {
        lines.push(format!(
            "version {}: {} .. {}{}",
            index + 1,
            bound(version.valid_from(), "beginning"),
            bound(version.expiring_date(), "open"),
            parent_label(registry, version)
        ));
        for weekday in WEEK {
            let hours: String = version
                .hours(weekday)
                .explicit()
                .map_or_else(|| String::from("default"), |hours| hours.to_string());
            lines.push(format!("  {:<9} {hours}", weekday_name(weekday)));
        }
        for exception in version.exceptions() {
            lines.push(format!(
                "  {} {}h {}",
                exception.date(),
                exception.hours(),
                exception.exception_type().name()
            ));
        }
    }
    lines
}

fn bound(date: Option<Date>, open: &str) -> String {
    date.map_or_else(|| open.to_string(), |date| date.to_string())
}

fn parent_label(registry: &CalendarRegistry, version: &CalendarVersion) -> String {
    version.parent().map_or_else(String::new, |parent| {
        registry.get(parent).map_or_else(
            |_| format!(" (parent {parent})"),
            |calendar| format!(" (parent {})", calendar.name()),
        )
    })
}
