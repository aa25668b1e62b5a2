use crate::config::{FrequencyLabels, PropertyNames};
use crate::errors::{AppError, AppResult};
use crate::models::frequency::Frequency;
use crate::notion::types::{Page, PropertyValue};
use tracing::warn;

/// A habit template, read-only to this job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: String,
    pub active: bool,
    pub frequency: Frequency,
    /// Day names as stored; only meaningful for weekly habits.
    pub days: Vec<String>,
}

impl Template {
    /// Read a template from a database record.
    ///
    /// A missing or mistyped property makes the template "not due" and is
    /// logged, unless `strict` is set, in which case it is an error.
    pub fn from_page(
        page: &Page,
        props: &PropertyNames,
        labels: &FrequencyLabels,
        strict: bool,
    ) -> AppResult<Self> {
        let schema_problem = |prop: &str, found: Option<&PropertyValue>| -> AppResult<()> {
            let reason = match found {
                None => format!("property '{prop}' is missing"),
                Some(v) => format!("property '{prop}' has unexpected type '{}'", v.kind()),
            };
            if strict {
                return Err(AppError::Template {
                    id: page.id.clone(),
                    reason,
                });
            }
            warn!(template = %page.id, "{reason}; treating as not due");
            Ok(())
        };

        let active = match page.property(&props.active) {
            Some(PropertyValue::Checkbox { checkbox }) => *checkbox,
            other => {
                schema_problem(&props.active, other)?;
                false
            }
        };

        let frequency = match page.property(&props.frequency) {
            Some(PropertyValue::Select { select }) => {
                Frequency::from_label(select.as_ref().map(|s| s.name.as_str()), labels)
            }
            other => {
                schema_problem(&props.frequency, other)?;
                Frequency::Unset
            }
        };

        // Days are only read for weekly habits, a daily template without
        // the column is fine.
        let days = if frequency == Frequency::Weekly {
            match page.property(&props.days) {
                Some(PropertyValue::MultiSelect { multi_select }) => {
                    multi_select.iter().map(|o| o.name.clone()).collect()
                }
                other => {
                    schema_problem(&props.days, other)?;
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            id: page.id.clone(),
            active,
            frequency,
            days,
        })
    }
}
