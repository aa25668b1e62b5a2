use crate::config::Config;
use crate::core::clock::Today;
use crate::core::due::is_due;
use crate::core::existing::{existing_habits, id_key};
use crate::core::weekday::{WeekdayResolver, normalize_day_name};
use crate::errors::AppResult;
use crate::models::log_entry::NewLogEntry;
use crate::models::template::Template;
use crate::notion::types::Filter;
use crate::notion::{DatabaseApi, query_all};
use tracing::{debug, info};

/// What one run saw and did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub date: String,
    pub day_name: String,
    pub logs_today: usize,
    pub templates: usize,
    pub already_logged: usize,
    pub not_due: usize,
    /// Template ids a log entry was created (or, in dry-run, would be) for.
    pub created: Vec<String>,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {} template(s), {} already logged, {} not due, {} {}",
            self.date,
            self.day_name,
            self.templates,
            self.already_logged,
            self.not_due,
            self.created.len(),
            if self.dry_run { "to create" } else { "created" }
        )
    }
}

/// Today's-habits sync: read logs, read templates, create the missing rows.
pub struct SyncLogic;

impl SyncLogic {
    pub fn run<A: DatabaseApi + ?Sized>(
        api: &A,
        cfg: &Config,
        today: &Today,
        dry_run: bool,
    ) -> AppResult<SyncReport> {
        let props = &cfg.properties;

        //
        // 1. Weekday name (local failure: nothing read, nothing written)
        //
        let day_name = WeekdayResolver::from_settings(&cfg.weekday).resolve(today)?;
        let today_name = normalize_day_name(&day_name);

        //
        // 2. Logs already dated today → set of logged habit ids
        //
        let logs = query_all(
            api,
            &cfg.databases.log,
            &Filter::date_equals(&props.date, today.date),
        )?;
        let mut existing = existing_habits(&logs, &props.habit);

        //
        // 3. Active templates
        //
        let templates = query_all(
            api,
            &cfg.databases.templates,
            &Filter::checkbox_equals(&props.active, true),
        )?;

        let mut report = SyncReport {
            date: today.iso_date(),
            day_name,
            logs_today: logs.len(),
            templates: templates.len(),
            dry_run,
            ..SyncReport::default()
        };

        //
        // 4. Decide and write, one request per due habit
        //
        for page in &templates {
            let key = id_key(&page.id);
            if existing.contains(&key) {
                report.already_logged += 1;
                continue;
            }

            let template =
                Template::from_page(page, props, &cfg.frequencies, cfg.strict_properties)?;
            if !is_due(&template, &today_name) {
                debug!(template = %template.id, frequency = template.frequency.as_str(), "not due");
                report.not_due += 1;
                continue;
            }

            if !dry_run {
                let entry = NewLogEntry::new(&template.id, today.date);
                api.create_page(&cfg.databases.log, &entry.to_properties(props))?;
                info!(template = %template.id, date = %report.date, "log entry created");
            }

            existing.insert(key);
            report.created.push(template.id);
        }

        Ok(report)
    }
}
