//! Energy conversion
//!
//! Provides a unit-tagged energy value and scalar conversion between units.

use serde::{Deserialize, Serialize};

use super::units::{kcal_to_kj, kj_to_kcal, EnergyUnit};

/// An immutable energy value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyAmount {
    pub value: f64,
    pub unit: EnergyUnit,
}

impl EnergyAmount {
    /// Create a new energy amount
    pub fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    /// Get the value expressed in kilocalories
    pub fn in_kcal(&self) -> f64 {
        match self.unit {
            EnergyUnit::Kcal => self.value,
            EnergyUnit::Kj => kj_to_kcal(self.value),
        }
    }

    /// Get the value expressed in kilojoules
    pub fn in_kj(&self) -> f64 {
        match self.unit {
            EnergyUnit::Kcal => kcal_to_kj(self.value),
            EnergyUnit::Kj => self.value,
        }
    }

    /// Convert to the target unit
    ///
    /// A same-unit conversion returns the value unchanged.
    pub fn to_unit(&self, target: EnergyUnit) -> EnergyAmount {
        if self.unit == target {
            return *self;
        }
        let value = match target {
            EnergyUnit::Kcal => self.in_kcal(),
            EnergyUnit::Kj => self.in_kj(),
        };
        EnergyAmount::new(value, target)
    }
}

/// Convert a scalar value between two energy units
pub fn convert(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    EnergyAmount::new(value, from).to_unit(to).value
}
