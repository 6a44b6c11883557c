use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use qotd::store::SqliteStore;

mod cli;

#[derive(Parser)]
#[command(name = "qotd")]
#[command(about = "Question of the Day - daily challenge and streak tracker")]
#[command(version)]
struct Cli {
    /// Path to the streak store (defaults to ~/.qotd/streaks.db)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Logical date override (YYYY-MM-DD, defaults to the local date)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's challenge
    Show {
        /// Learning-style profile used to pick the challenge (e.g. "architect")
        #[arg(long)]
        style: Option<String>,

        /// Reveal the hint
        #[arg(long)]
        hint: bool,
    },

    /// Show streak counters and milestone progress
    Status {
        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit an answer for today's challenge
    Submit {
        /// The answer text
        answer: String,
    },

    /// Delete all persisted streak state
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let store = match cli.store {
        Some(path) => SqliteStore::open(&path)?,
        None => SqliteStore::open_default()?,
    };
    let today = resolve_date(cli.date.as_deref())?;

    match cli.command {
        Some(Commands::Show { style, hint }) => {
            cli::show::show_command(&store, today, style.as_deref(), hint)?;
        }
        Some(Commands::Status { json }) => {
            cli::status::status_command(&store, today, json)?;
        }
        Some(Commands::Submit { answer }) => {
            cli::submit::submit_command(&store, today, &answer)?;
        }
        Some(Commands::Reset) => {
            cli::reset::reset_command(&store)?;
        }
        None => {
            cli::status::status_command(&store, today, false)?;
        }
    }

    Ok(())
}

/// Resolve the logical "today": an explicit override wins, otherwise the
/// local calendar date. The tracker itself never reads a clock.
fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => qotd::tracker::parse_date(s)
            .ok_or_else(|| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", s)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
