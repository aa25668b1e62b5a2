use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};

/// Property name → value, in a stable order for request bodies.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A database record as returned by the query and create endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// A property value, discriminated by the `type` Notion declares for it.
///
/// Only the kinds the job reads or writes are modelled; everything else
/// decodes as `Unsupported` so schema additions never break a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Checkbox {
        checkbox: bool,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Relation {
        relation: Vec<RelationRef>,
    },
    Date {
        date: Option<DateValue>,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    pub fn checkbox(value: bool) -> Self {
        PropertyValue::Checkbox { checkbox: value }
    }

    pub fn relation_to(id: &str) -> Self {
        PropertyValue::Relation {
            relation: vec![RelationRef { id: id.to_string() }],
        }
    }

    pub fn date(day: NaiveDate) -> Self {
        PropertyValue::Date {
            date: Some(DateValue {
                start: day.format("%Y-%m-%d").to_string(),
                end: None,
            }),
        }
    }

    /// The declared type name, as Notion spells it.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Checkbox { .. } => "checkbox",
            PropertyValue::Select { .. } => "select",
            PropertyValue::MultiSelect { .. } => "multi_select",
            PropertyValue::Relation { .. } => "relation",
            PropertyValue::Date { .. } => "date",
            PropertyValue::Unsupported => "unsupported",
        }
    }

    /// Body used when writing the value in a create request
    /// (`{"checkbox": false}`, `{"relation": [{"id": ..}]}`, ...).
    pub fn to_request_value(&self) -> Value {
        match self {
            PropertyValue::Checkbox { checkbox } => json!({ "checkbox": checkbox }),
            PropertyValue::Select { select } => json!({ "select": select }),
            PropertyValue::MultiSelect { multi_select } => json!({ "multi_select": multi_select }),
            PropertyValue::Relation { relation } => json!({ "relation": relation }),
            PropertyValue::Date { date } => json!({ "date": date }),
            PropertyValue::Unsupported => Value::Null,
        }
    }
}

/// One page of query results plus the cursor for the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Checkbox { equals: bool },
    Date { equals: String },
}

/// Single-property equality filter, serialised the way the query
/// endpoint expects: `{"property": "Active", "checkbox": {"equals": true}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub property: String,
    #[serde(flatten)]
    pub condition: Condition,
}

impl Filter {
    pub fn checkbox_equals(property: &str, value: bool) -> Self {
        Self {
            property: property.to_string(),
            condition: Condition::Checkbox { equals: value },
        }
    }

    pub fn date_equals(property: &str, day: NaiveDate) -> Self {
        Self {
            property: property.to_string(),
            condition: Condition::Date {
                equals: day.format("%Y-%m-%d").to_string(),
            },
        }
    }
}
