//! Data models
//!
//! In-memory state owned by the tracker session.

mod food_entry;
mod food_log;

pub use food_entry::FoodEntry;
pub use food_log::{FoodLog, LogTotals};
