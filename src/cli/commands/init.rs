use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, WeekdaySettings};
use crate::core::log::LogLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes a default configuration file (never overwriting an existing
/// one) and creates the run journal.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { weekday_preset } = cmd {
        let weekday = match weekday_preset {
            Some(name) => WeekdaySettings::preset(name).ok_or_else(|| {
                AppError::Config(format!(
                    "Unknown weekday preset '{name}'. Use abbreviation, english or hebrew"
                ))
            })?,
            None => WeekdaySettings::default(),
        };

        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        if Config::init_file(&path, weekday)? {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already exists, left untouched: {}",
                path.display()
            ));
        }

        LogLogic::record(
            &cfg.journal,
            "init",
            &path.to_string_lossy(),
            "configuration initialized",
        );
        success(format!("Run journal: {}", cfg.journal));
        info("Set NOTION_TOKEN, TEMPLATES_DB_ID and LOG_DB_ID before the first run");
    }

    Ok(())
}
