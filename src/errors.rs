//! Unified application error type.
//! All modules (notion, core, db, cli, config) return AppError so the
//! binary has a single place where errors become exit codes.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local run journal
    // ---------------------------
    #[error("Journal database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Remote (Notion) errors
    // ---------------------------
    #[error("Notion API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / local computation
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown time zone: {0}")]
    InvalidZone(String),

    #[error("Could not map weekday {0}")]
    WeekdayUnmapped(u32),

    #[error("Template {id}: {reason}")]
    Template { id: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// Every failure that reaches `main` is terminal for the current tick;
    /// the external scheduler retries on the next one.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// True when the error came from the remote database rather than
    /// from a local computation.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::Api { .. } | AppError::Transport(_) | AppError::Json(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
