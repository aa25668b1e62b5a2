use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(&cfg.masked())
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        // ---- CHECK CONFIG ----
        if *check {
            let warnings = cfg.validate()?;
            if warnings.is_empty() {
                success("Configuration OK");
            } else {
                for w in &warnings {
                    warning(w);
                }
                success(format!(
                    "Configuration usable ({} warning(s))",
                    warnings.len()
                ));
            }
        }
    }

    Ok(())
}
