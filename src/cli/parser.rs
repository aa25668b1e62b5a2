use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for habitsync
/// Fills today's habit log in Notion from the active habit templates
#[derive(Parser)]
#[command(
    name = "habitsync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create today's habit log entries in Notion from active habit templates",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the run journal path
    #[arg(global = true, long = "journal", value_name = "FILE")]
    pub journal: Option<String>,

    /// Pretend the current instant is this RFC 3339 timestamp
    #[arg(global = true, long = "now", value_name = "RFC3339")]
    pub now: Option<String>,

    /// Verbose diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sync today's habit log (meant to be called every minute by cron)
    Run {
        #[arg(long = "dry-run", help = "Compute what would be created without writing")]
        dry_run: bool,

        #[arg(long = "force", help = "Skip the run-time check")]
        force: bool,
    },

    /// Write a default configuration file
    Init {
        #[arg(
            long = "weekday-preset",
            value_name = "PRESET",
            help = "Weekday naming: abbreviation (Mon, Tue, ...), english or hebrew"
        )]
        weekday_preset: Option<String>,
    },

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration (token masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,
    },

    /// Print the local run journal
    Log {
        #[arg(long = "print", help = "Print rows from the run journal")]
        print: bool,
    },
}
