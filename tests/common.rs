#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use habitsync::config::Config;
use habitsync::core::clock::Today;
use habitsync::errors::{AppError, AppResult};
use habitsync::notion::DatabaseApi;
use habitsync::notion::types::{
    Condition, Filter, Page, PropertyMap, PropertyValue, QueryPage, SelectOption,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATES: &str = "templates-db";
pub const LOGS: &str = "log-db";

pub fn habitsync() -> Command {
    let mut cmd = cargo_bin_cmd!("habitsync");
    cmd.env_remove("NOTION_TOKEN")
        .env_remove("TEMPLATES_DB_ID")
        .env_remove("LOG_DB_ID")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `yaml` as a config file inside `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("habitsync.conf");
    fs::write(&path, yaml).expect("write config");
    path
}

pub fn test_config() -> Config {
    let mut cfg = Config::default();
    cfg.databases.templates = TEMPLATES.into();
    cfg.databases.log = LOGS.into();
    cfg
}

/// 2025-09-02 was a Tuesday.
pub fn tuesday() -> Today {
    Today {
        date: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
        weekday: 2,
        local_time: "07:30".into(),
        abbreviation: "Tue".into(),
    }
}

/// Server-side equality filter, evaluated locally.
pub fn filter_matches(filter: &Filter, page: &Page) -> bool {
    match (&filter.condition, page.property(&filter.property)) {
        (Condition::Checkbox { equals }, Some(PropertyValue::Checkbox { checkbox })) => {
            checkbox == equals
        }
        (Condition::Date { equals }, Some(PropertyValue::Date { date: Some(d) })) => {
            // stored dates may carry a time component
            d.start.get(..10) == Some(equals.as_str())
        }
        _ => false,
    }
}

pub fn template(id: &str, active: bool, frequency: Option<&str>, days: &[&str]) -> Page {
    let mut properties = HashMap::new();
    properties.insert("Active".to_string(), PropertyValue::checkbox(active));
    properties.insert(
        "d/w".to_string(),
        PropertyValue::Select {
            select: frequency.map(|f| SelectOption { name: f.into() }),
        },
    );
    properties.insert(
        "Days".to_string(),
        PropertyValue::MultiSelect {
            multi_select: days
                .iter()
                .map(|d| SelectOption {
                    name: d.to_string(),
                })
                .collect(),
        },
    );
    Page {
        id: id.into(),
        properties,
    }
}

pub fn log_entry(id: &str, date: NaiveDate, habit: &str) -> Page {
    let mut properties = HashMap::new();
    properties.insert("Habit".to_string(), PropertyValue::relation_to(habit));
    properties.insert("Date".to_string(), PropertyValue::date(date));
    properties.insert("Completed".to_string(), PropertyValue::checkbox(false));
    Page {
        id: id.into(),
        properties,
    }
}

/// In-memory stand-in for the two Notion databases.
#[derive(Default)]
pub struct FakeNotion {
    pub databases: RefCell<HashMap<String, Vec<Page>>>,
    /// Results per query page; 0 means everything in one page.
    pub page_size: usize,
    pub queries: Cell<usize>,
    pub creates: Cell<usize>,
    /// Fail the n-th create call (1-based).
    pub fail_create_at: Option<usize>,
}

impl FakeNotion {
    pub fn new(templates: Vec<Page>, logs: Vec<Page>) -> Self {
        let fake = Self::default();
        fake.databases
            .borrow_mut()
            .insert(TEMPLATES.to_string(), templates);
        fake.databases.borrow_mut().insert(LOGS.to_string(), logs);
        fake
    }

    pub fn logs(&self) -> Vec<Page> {
        self.databases
            .borrow()
            .get(LOGS)
            .cloned()
            .unwrap_or_default()
    }

    /// Habit ids of log rows dated `date`.
    pub fn logged_habits(&self, date: NaiveDate) -> Vec<String> {
        let filter = Filter::date_equals("Date", date);
        self.logs()
            .iter()
            .filter(|p| filter_matches(&filter, p))
            .flat_map(|p| match p.property("Habit") {
                Some(PropertyValue::Relation { relation }) => {
                    relation.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
                }
                _ => Vec::new(),
            })
            .collect()
    }
}

impl DatabaseApi for FakeNotion {
    fn query(
        &self,
        database_id: &str,
        filter: &Filter,
        start_cursor: Option<&str>,
    ) -> AppResult<QueryPage> {
        self.queries.set(self.queries.get() + 1);

        let dbs = self.databases.borrow();
        let rows = dbs.get(database_id).ok_or_else(|| AppError::Api {
            status: 404,
            code: "object_not_found".into(),
            message: format!("Could not find database with ID: {database_id}"),
        })?;
        let matching: Vec<Page> = rows
            .iter()
            .filter(|p| filter_matches(filter, p))
            .cloned()
            .collect();

        let start: usize = start_cursor.map(|c| c.parse().unwrap()).unwrap_or(0);
        let size = if self.page_size == 0 {
            matching.len().max(1)
        } else {
            self.page_size
        };
        let end = (start + size).min(matching.len());
        let next = (end < matching.len()).then(|| end.to_string());

        Ok(QueryPage {
            results: matching[start..end].to_vec(),
            has_more: next.is_some(),
            next_cursor: next,
        })
    }

    fn create_page(&self, database_id: &str, properties: &PropertyMap) -> AppResult<Page> {
        let n = self.creates.get() + 1;
        self.creates.set(n);
        if self.fail_create_at == Some(n) {
            return Err(AppError::Api {
                status: 429,
                code: "rate_limited".into(),
                message: "slow down".into(),
            });
        }

        let page = Page {
            id: format!("new-{n}"),
            properties: properties
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        self.databases
            .borrow_mut()
            .entry(database_id.to_string())
            .or_default()
            .push(page.clone());
        Ok(page)
    }
}
