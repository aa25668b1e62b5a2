use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ENV_TOKEN: &str = "NOTION_TOKEN";
pub const ENV_TEMPLATES_DB: &str = "TEMPLATES_DB_ID";
pub const ENV_LOG_DB: &str = "LOG_DB_ID";

/// Everything the job needs, loaded once at start and passed down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notion: NotionSettings,
    #[serde(default)]
    pub databases: Databases,
    #[serde(default)]
    pub properties: PropertyNames,
    #[serde(default)]
    pub frequencies: FrequencyLabels,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub weekday: WeekdaySettings,
    /// Fail the run when a template lacks Active/Frequency/Days
    /// instead of treating it as not due.
    #[serde(default)]
    pub strict_properties: bool,
    #[serde(default = "default_journal")]
    pub journal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    pub token: String,
    pub base_url: String,
    pub api_version: String,
    pub page_size: u32,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: "https://api.notion.com".to_string(),
            api_version: "2022-06-28".to_string(),
            page_size: 100,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Databases {
    pub templates: String,
    pub log: String,
}

/// Property labels as they appear in the two Notion databases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    pub active: String,
    pub frequency: String,
    pub days: String,
    pub habit: String,
    pub date: String,
    pub completed: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            active: "Active".to_string(),
            frequency: "d/w".to_string(),
            days: "Days".to_string(),
            habit: "Habit".to_string(),
            date: "Date".to_string(),
            completed: "Completed".to_string(),
        }
    }
}

/// Select option names that mean "daily" and "weekly".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyLabels {
    pub daily: String,
    pub weekly: String,
}

impl Default for FrequencyLabels {
    fn default() -> Self {
        Self {
            daily: "Daily".to_string(),
            weekly: "Weekly".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// IANA zone name, e.g. `Asia/Jerusalem`.
    pub zone: String,
    /// Local `HH:MM` at which the job is allowed to run.
    pub run_time: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            zone: "Asia/Jerusalem".to_string(),
            run_time: "07:30".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayStrategy {
    /// Three-letter English abbreviation (`Mon`, `Tue`, ...).
    #[default]
    Abbreviation,
    /// Explicit `1=Monday ... 7=Sunday` → name table.
    Table,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdaySettings {
    pub strategy: WeekdayStrategy,
    pub names: BTreeMap<u32, String>,
}

impl WeekdaySettings {
    pub fn english_table() -> Self {
        Self::table(&[
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ])
    }

    pub fn hebrew_table() -> Self {
        Self::table(&["שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת", "ראשון"])
    }

    /// Look up a preset by name (`abbreviation`, `english`, `hebrew`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "abbreviation" | "abbr" => Some(Self::default()),
            "english" | "en" => Some(Self::english_table()),
            "hebrew" | "he" => Some(Self::hebrew_table()),
            _ => None,
        }
    }

    fn table(names: &[&str; 7]) -> Self {
        Self {
            strategy: WeekdayStrategy::Table,
            names: names
                .iter()
                .enumerate()
                .map(|(i, n)| (i as u32 + 1, n.to_string()))
                .collect(),
        }
    }
}

fn default_journal() -> String {
    Config::config_dir()
        .join("habitsync.sqlite")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notion: NotionSettings::default(),
            databases: Databases::default(),
            properties: PropertyNames::default(),
            frequencies: FrequencyLabels::default(),
            schedule: Schedule::default(),
            weekday: WeekdaySettings::default(),
            strict_properties: false,
            journal: default_journal(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("habitsync")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("habitsync.conf")
    }

    /// Load configuration from `path` (or the default location), falling
    /// back to defaults when the file does not exist. Environment secrets
    /// are applied on top.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        let mut cfg = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
            Self::from_yaml(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env_from(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    /// Overlay the token and database ids from an environment lookup.
    /// Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get(ENV_TOKEN) {
            self.notion.token = token;
        }
        if let Some(id) = get(ENV_TEMPLATES_DB) {
            self.databases.templates = id;
        }
        if let Some(id) = get(ENV_LOG_DB) {
            self.databases.log = id;
        }
    }

    /// Write a fresh configuration file. Returns `false` (and leaves the
    /// file alone) when one already exists.
    pub fn init_file(path: &Path, weekday: WeekdaySettings) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let cfg = Config {
            weekday,
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }

    pub fn zone(&self) -> AppResult<Tz> {
        self.schedule
            .zone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidZone(self.schedule.zone.clone()))
    }

    /// Check the parts of the configuration that can be verified locally.
    /// Hard problems are errors; gaps that only bite on some days are
    /// returned as warnings.
    pub fn validate(&self) -> AppResult<Vec<String>> {
        self.zone()?;
        parse_time(&self.schedule.run_time)
            .ok_or_else(|| AppError::InvalidTime(self.schedule.run_time.clone()))?;

        let mut warnings = Vec::new();

        if self.weekday.strategy == WeekdayStrategy::Table {
            let missing: Vec<String> = (1..=7)
                .filter(|n| {
                    self.weekday
                        .names
                        .get(n)
                        .is_none_or(|name| name.trim().is_empty())
                })
                .map(|n| n.to_string())
                .collect();
            if !missing.is_empty() {
                warnings.push(format!(
                    "weekday table has no name for day(s) {}",
                    missing.join(", ")
                ));
            }
        }

        if self.notion.token.is_empty() {
            warnings.push(format!("no Notion token (set {ENV_TOKEN})"));
        }
        if self.databases.templates.is_empty() {
            warnings.push(format!("no templates database id (set {ENV_TEMPLATES_DB})"));
        }
        if self.databases.log.is_empty() {
            warnings.push(format!("no log database id (set {ENV_LOG_DB})"));
        }

        Ok(warnings)
    }

    /// Copy of the configuration safe to print.
    pub fn masked(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.notion.token.is_empty() {
            let tail: String = cfg
                .notion
                .token
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            cfg.notion.token = format!("****{tail}");
        }
        cfg
    }
}
