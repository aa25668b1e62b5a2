//! Time-of-day gate: the job only does work at the configured local minute.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// The calendar facts of "today" in the configured zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Today {
    pub date: NaiveDate,
    /// ISO weekday number, 1 = Monday ... 7 = Sunday.
    pub weekday: u32,
    /// Local `HH:MM`.
    pub local_time: String,
    /// Three-letter English abbreviation (`Mon`, `Tue`, ...).
    pub abbreviation: String,
}

impl Today {
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    NotYet { local_time: String },
    Run(Today),
}

pub struct ClockGate {
    zone: Tz,
    run_time: NaiveTime,
}

impl ClockGate {
    pub fn new(zone: Tz, run_time: NaiveTime) -> Self {
        Self { zone, run_time }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let zone = cfg.zone()?;
        let run_time = parse_time(&cfg.schedule.run_time)
            .ok_or_else(|| AppError::InvalidTime(cfg.schedule.run_time.clone()))?;
        Ok(Self::new(zone, run_time))
    }

    /// Convert `now` to the zone and compute today's date and weekday.
    pub fn today(&self, now: DateTime<Utc>) -> Today {
        let local = now.with_timezone(&self.zone);
        Today {
            date: local.date_naive(),
            weekday: local.weekday().number_from_monday(),
            local_time: local.format("%H:%M").to_string(),
            abbreviation: local.format("%a").to_string(),
        }
    }

    /// `Run` only when the local hour:minute equals the run time exactly.
    pub fn check(&self, now: DateTime<Utc>) -> Gate {
        let today = self.today(now);
        if today.local_time == self.run_time.format("%H:%M").to_string() {
            Gate::Run(today)
        } else {
            Gate::NotYet {
                local_time: today.local_time,
            }
        }
    }
}
