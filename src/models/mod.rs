pub mod frequency;
pub mod log_entry;
pub mod template;
