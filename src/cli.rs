//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use isbncheck::output::OutputMode;

/// isbncheck - Validate ISBN-10 identifiers
#[derive(Parser, Debug)]
#[command(
    name = "isbncheck",
    version,
    about = "Validate ISBN-10 identifiers",
    long_about = "Check whether a candidate string is a valid ISBN-10.\n\n\
                  A candidate must be nine digits followed by a final digit or 'X'.\n\
                  The weighted checksum over all ten positions must be divisible by 11."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a candidate ISBN-10
    Check {
        /// The candidate string to check
        isbn: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { isbn }) => commands::check(&isbn, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("isbncheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("isbncheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'isbncheck --help' for usage");
                println!("Run 'isbncheck check <ISBN>' to check a candidate");
            }
            Ok(())
        },
    }
}
