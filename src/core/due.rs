//! Whether a template is due on a given weekday.

use crate::core::weekday::normalize_day_name;
use crate::models::frequency::Frequency;
use crate::models::template::Template;

/// `today_name` must already be normalised.
pub fn is_due(template: &Template, today_name: &str) -> bool {
    if !template.active {
        return false;
    }

    match &template.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => template
            .days
            .iter()
            .any(|d| normalize_day_name(d) == today_name),
        Frequency::Other(_) | Frequency::Unset => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(frequency: Frequency, days: &[&str]) -> Template {
        Template {
            id: "t".into(),
            active: true,
            frequency,
            days: days.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn daily_is_always_due() {
        assert!(is_due(&template(Frequency::Daily, &[]), "tue"));
    }

    #[test]
    fn weekly_needs_matching_day() {
        let t = template(Frequency::Weekly, &["Mon", " TUE "]);
        assert!(is_due(&t, "tue"));
        assert!(!is_due(&t, "wed"));
    }

    #[test]
    fn weekly_matches_hebrew_with_marks() {
        let t = template(Frequency::Weekly, &["שישי'"]);
        assert!(is_due(&t, &normalize_day_name("שישי")));
    }

    #[test]
    fn other_frequencies_and_inactive_are_skipped() {
        assert!(!is_due(&template(Frequency::Other("Monthly".into()), &[]), "tue"));
        assert!(!is_due(&template(Frequency::Unset, &["Tue"]), "tue"));

        let mut inactive = template(Frequency::Daily, &[]);
        inactive.active = false;
        assert!(!is_due(&inactive, "tue"));
    }
}
