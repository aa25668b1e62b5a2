use crate::db::log::{LogRow, load_all, ttlog};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 40;

/// ANSI colour for a journal operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "sync" => Colour::Green,
        "dry_run" => Colour::Yellow,
        "error" => Colour::Red,
        "init" => Colour::Blue,
        _ => Colour::White,
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let mut t: String = s.chars().take(width.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Best-effort journal write: a failure is reported and swallowed so
    /// it never changes the outcome of the run.
    pub fn record(journal: &str, operation: &str, target: &str, message: &str) {
        let result = DbPool::new(journal)
            .and_then(|pool| ttlog(&pool.conn, operation, target, message));
        if let Err(e) = result {
            warning(format!("Failed to write run journal: {e}"));
        }
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_all(&pool.conn)?;

        if entries.is_empty() {
            info("Run journal is empty");
            return Ok(());
        }

        println!("📜 Run journal:\n");
        for line in Self::format_rows(&entries) {
            println!("{line}");
        }

        Ok(())
    }

    fn format_rows(entries: &[LogRow]) -> Vec<String> {
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len())
            .max()
            .unwrap_or(4);
        let target_w = entries
            .iter()
            .map(|e| e.target.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_TARGET_WIDTH);

        entries
            .iter()
            .map(|e| {
                // pad before painting, ANSI codes have no width
                let op = format!("{:<op_w$}", e.operation);
                let target = format!("{:<target_w$}", truncate(&e.target, MAX_TARGET_WIDTH));
                format!(
                    "{:>id_w$}: {:<date_w$} | {} {} => {}",
                    e.id,
                    e.date,
                    color_for_operation(&e.operation).paint(op),
                    target,
                    e.message,
                )
            })
            .collect()
    }
}
