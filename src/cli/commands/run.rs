use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::{ClockGate, Gate};
use crate::core::log::LogLogic;
use crate::core::sync::SyncLogic;
use crate::errors::AppResult;
use crate::notion::NotionClient;
use crate::ui::messages::{detail, info, success};
use crate::utils::time::parse_optional_instant;
use chrono::Utc;
use tracing::debug;

/// Handle the `run` command: clock gate, then the sync.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { dry_run, force } = cmd {
        //
        // 1. Clock gate
        //
        let now = parse_optional_instant(cli.now.as_ref())?.unwrap_or_else(Utc::now);
        let gate = ClockGate::from_config(cfg)?;

        let today = match gate.check(now) {
            Gate::Run(today) => today,
            Gate::NotYet { .. } if *force => gate.today(now),
            Gate::NotYet { local_time } => {
                debug!(%local_time, run_time = %cfg.schedule.run_time, "outside run time");
                info("Not time yet");
                return Ok(());
            }
        };

        //
        // 2. Sync
        //
        let client = NotionClient::new(&cfg.notion);
        let report = match SyncLogic::run(&client, cfg, &today, *dry_run) {
            Ok(report) => report,
            Err(e) => {
                LogLogic::record(&cfg.journal, "error", &today.iso_date(), &e.to_string());
                return Err(e);
            }
        };

        //
        // 3. Report
        //
        let operation = if report.dry_run { "dry_run" } else { "sync" };
        LogLogic::record(&cfg.journal, operation, &report.date, &report.summary());

        info(report.summary());
        for id in &report.created {
            detail(id);
        }
        success("Done");
    }

    Ok(())
}
