//! Food entry model

use serde::{Deserialize, Serialize};

use crate::energy::{kcal_to_kj, EnergyAmount, EnergyUnit};

/// A single tracked food
///
/// Energy is normalized to kilocalories when the entry is created, so totals
/// and redraws never depend on the unit the value was entered in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    /// Free-form amount text ("1", "2 slices"); absent when left blank
    pub amount: Option<String>,
    /// Energy in kilocalories, the canonical unit
    pub kcal: f64,
}

impl FoodEntry {
    /// Create an entry, normalizing the energy value to kilocalories
    pub fn new(name: String, amount: Option<String>, energy: f64, unit: EnergyUnit) -> Self {
        Self {
            name,
            amount,
            kcal: EnergyAmount::new(energy, unit).in_kcal(),
        }
    }

    /// Get the entry's energy in kilojoules
    pub fn kj(&self) -> f64 {
        kcal_to_kj(self.kcal)
    }
}
