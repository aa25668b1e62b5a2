//! Set of habit ids already logged today.

use crate::notion::types::{Page, PropertyValue};
use std::collections::HashSet;
use tracing::warn;

/// Canonical form of a Notion id: ids come back both with and without
/// dashes depending on the endpoint.
pub fn id_key(id: &str) -> String {
    id.replace('-', "").to_lowercase()
}

/// Union of every template id referenced by the habit relation of `logs`.
/// Entries whose habit property is missing or not a relation are skipped.
pub fn existing_habits(logs: &[Page], habit_prop: &str) -> HashSet<String> {
    let mut existing = HashSet::new();

    for log in logs {
        match log.property(habit_prop) {
            Some(PropertyValue::Relation { relation }) => {
                existing.extend(relation.iter().map(|r| id_key(&r.id)));
            }
            Some(other) => {
                warn!(
                    log = %log.id,
                    "property '{habit_prop}' is '{}', not a relation; ignored",
                    other.kind()
                );
            }
            None => {
                warn!(log = %log.id, "property '{habit_prop}' is missing; ignored");
            }
        }
    }

    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::types::RelationRef;
    use std::collections::HashMap;

    fn log_page(id: &str, habit: Option<PropertyValue>) -> Page {
        let mut properties = HashMap::new();
        if let Some(v) = habit {
            properties.insert("Habit".to_string(), v);
        }
        Page {
            id: id.to_string(),
            properties,
        }
    }

    #[test]
    fn unions_all_related_ids() {
        let logs = vec![
            log_page("l1", Some(PropertyValue::relation_to("T1"))),
            log_page(
                "l2",
                Some(PropertyValue::Relation {
                    relation: vec![
                        RelationRef { id: "t2".into() },
                        RelationRef { id: "t1".into() },
                    ],
                }),
            ),
        ];
        let set = existing_habits(&logs, "Habit");
        assert_eq!(set.len(), 2);
        assert!(set.contains(&id_key("t2")));
    }

    #[test]
    fn tolerates_schema_drift() {
        let logs = vec![
            log_page("l1", None),
            log_page("l2", Some(PropertyValue::checkbox(true))),
            log_page("l3", Some(PropertyValue::relation_to("t3"))),
        ];
        let set = existing_habits(&logs, "Habit");
        assert_eq!(set.len(), 1);
        assert!(set.contains("t3"));
    }

    #[test]
    fn id_key_ignores_dashes_and_case() {
        assert_eq!(id_key("1A2b-3c4d"), id_key("1a2b3C4D"));
    }
}
