//! habitsync library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! the sync is built from.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod notion;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Run { .. } => cli::commands::run::handle(cli, &cli.command, cfg),
        Commands::Init { .. } => cli::commands::init::handle(cli, &cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics on stderr. `RUST_LOG` wins; otherwise `warn`, or `debug`
/// with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "habitsync=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // a second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 2️⃣ load config once (file + environment secrets)
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ command-line override of the journal path
    if let Some(journal) = &cli.journal {
        cfg.journal = journal.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
