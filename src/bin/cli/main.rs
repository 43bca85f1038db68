mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use jin_lib::vocabulary::SetKind;

#[derive(Parser)]
#[command(name = "jin-cli", about = "Jin study progress CLI", version)]
struct Cli {
    /// Data directory (default: platform data dir, or `data_dir` in config.toml)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Vocabulary set, e.g. "hsk1" or "fiction" (default: global progress)
    #[arg(long, global = true)]
    set: Option<SetKind>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Subcommand)]
enum Command {
    /// Show completion, streaks and accuracy
    Stats,

    /// List completed sessions, newest first
    Sessions {
        /// Maximum sessions to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Record a single answer
    Record {
        /// Whether the answer was right
        outcome: Outcome,
    },

    /// Record a finished session
    Complete {
        /// Cards studied in the session
        #[arg(long)]
        cards: u32,
        /// Cards answered correctly
        #[arg(long)]
        correct: u32,
        /// Session length in seconds
        #[arg(long, default_value = "0")]
        duration: f64,
    },

    /// Clear all progress
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new(cli.data_dir.as_deref())?;

    match cli.command {
        Command::Stats => {
            commands::stats::run(&app, cli.set, &cli.format, use_color)?;
        }
        Command::Sessions { limit } => {
            commands::sessions::run(&app, cli.set, limit, &cli.format, use_color)?;
        }
        Command::Record { outcome } => {
            commands::record::run(&app, cli.set, &outcome, &cli.format, use_color)?;
        }
        Command::Complete { cards, correct, duration } => {
            commands::complete::run(
                &app,
                cli.set,
                cards,
                correct,
                duration,
                &cli.format,
                use_color,
            )?;
        }
        Command::Reset { yes } => {
            commands::reset::run(&app, cli.set, yes)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
