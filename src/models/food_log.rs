//! Food log model
//!
//! The ordered in-memory list behind the food tracker.

use serde::{Deserialize, Serialize};

use crate::energy::kcal_to_kj;

use super::FoodEntry;

/// Running totals across the whole log
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LogTotals {
    pub kcal: f64,
    pub kj: f64,
}

/// Ordered collection of food entries
///
/// Entries keep insertion order. Positions are 1-based and always refer to
/// the current list state, so removing an entry shifts every later entry's
/// position down by one.
#[derive(Debug, Clone, Default)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
}

impl FoodLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the log
    pub fn add(&mut self, entry: FoodEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at a 1-based position
    ///
    /// Returns the removed entry, or None when the position is out of range.
    pub fn remove(&mut self, position: usize) -> Option<FoodEntry> {
        if position == 0 || position > self.entries.len() {
            return None;
        }
        Some(self.entries.remove(position - 1))
    }

    /// Remove every entry in one action
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum the stored kilocalories and derive the kilojoule total
    ///
    /// An empty log totals to zero for both units.
    pub fn totals(&self) -> LogTotals {
        let kcal: f64 = self.entries.iter().map(|e| e.kcal).sum();
        LogTotals {
            kcal,
            kj: kcal_to_kj(kcal),
        }
    }

    /// Get the entries in insertion order
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
