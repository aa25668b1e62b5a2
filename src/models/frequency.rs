use crate::config::FrequencyLabels;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Frequency {
    Daily,
    Weekly,
    /// Any other select value; never due.
    Other(String),
    /// Select left empty or property missing.
    Unset,
}

impl Frequency {
    /// Map a select option name to a frequency using the configured labels.
    pub fn from_label(name: Option<&str>, labels: &FrequencyLabels) -> Self {
        match name.map(str::trim) {
            None | Some("") => Frequency::Unset,
            Some(n) if n == labels.daily.trim() => Frequency::Daily,
            Some(n) if n == labels.weekly.trim() => Frequency::Weekly,
            Some(other) => Frequency::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Other(s) => s,
            Frequency::Unset => "-",
        }
    }
}
