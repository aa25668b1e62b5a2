//! Resolving today's weekday to the day-name spelling used by the Days
//! property, and normalising day names for comparison.

use crate::config::{WeekdaySettings, WeekdayStrategy};
use crate::core::clock::Today;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Quote-like marks that are optional in day-name spellings
/// (ASCII quotes, Hebrew geresh and gershayim).
static OPTIONAL_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("['\"\u{05F3}\u{05F4}]").expect("static regex"));

/// Lower-case, drop optional marks, trim.
pub fn normalize_day_name(s: &str) -> String {
    let lower = s.to_lowercase();
    OPTIONAL_MARKS.replace_all(&lower, "").trim().to_string()
}

pub struct WeekdayResolver {
    strategy: WeekdayStrategy,
    names: BTreeMap<u32, String>,
}

impl WeekdayResolver {
    pub fn from_settings(settings: &WeekdaySettings) -> Self {
        Self {
            strategy: settings.strategy,
            names: settings.names.clone(),
        }
    }

    /// Today's day name as stored in the templates (not normalised).
    pub fn resolve(&self, today: &Today) -> AppResult<String> {
        match self.strategy {
            WeekdayStrategy::Abbreviation => Ok(today.abbreviation.clone()),
            WeekdayStrategy::Table => self
                .names
                .get(&today.weekday)
                .filter(|n| !n.trim().is_empty())
                .cloned()
                .ok_or(AppError::WeekdayUnmapped(today.weekday)),
        }
    }
}
