pub mod clock;
pub mod due;
pub mod existing;
pub mod log;
pub mod sync;
pub mod weekday;
