//! Energy units and conversion constants
//!
//! Provides the energy unit type, the kcal/kJ conversion factor, and display rounding.

use serde::{Deserialize, Serialize};

/// Kilojoules per kilocalorie (thermochemical)
pub const KJ_PER_KCAL: f64 = 4.184;

/// Energy measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    /// Kilocalories - the canonical storage unit
    Kcal,
    /// Kilojoules
    Kj,
}

impl EnergyUnit {
    /// Get the display label for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kcal" | "kilocalorie" | "kilocalories" => Some(EnergyUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Some(EnergyUnit::Kj),
            _ => None,
        }
    }
}

// ============================================================================
// Energy Conversion
// ============================================================================

/// Convert kilocalories to kilojoules
pub fn kcal_to_kj(kcal: f64) -> f64 {
    kcal * KJ_PER_KCAL
}

/// Convert kilojoules to kilocalories
pub fn kj_to_kcal(kj: f64) -> f64 {
    kj / KJ_PER_KCAL
}

// ============================================================================
// Display Rounding
// ============================================================================

/// Round half away from zero at the given decimal precision
///
/// An epsilon nudge counters binary representation error, so a value
/// sitting just under a .5 boundary (like 1.005 stored as 1.00499...)
/// still rounds up.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let nudged = if value < 0.0 {
        value - f64::EPSILON
    } else {
        value + f64::EPSILON
    };
    (nudged * factor).round() / factor
}
