//! Local run journal (SQLite). Write-only history of what each run did;
//! never read back for de-duplication.

pub mod initialize;
pub mod log;
pub mod pool;
