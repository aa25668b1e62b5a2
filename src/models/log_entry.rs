use crate::config::PropertyNames;
use crate::notion::types::{PropertyMap, PropertyValue};
use chrono::NaiveDate;

/// A log row about to be created: one habit, one day, not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub habit_id: String,
    pub date: NaiveDate,
}

impl NewLogEntry {
    pub fn new(habit_id: &str, date: NaiveDate) -> Self {
        Self {
            habit_id: habit_id.to_string(),
            date,
        }
    }

    /// Property map for the create request. `completed` is always false.
    pub fn to_properties(&self, props: &PropertyNames) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert(
            props.habit.clone(),
            PropertyValue::relation_to(&self.habit_id),
        );
        map.insert(props.date.clone(), PropertyValue::date(self.date));
        map.insert(props.completed.clone(), PropertyValue::checkbox(false));
        map
    }
}
