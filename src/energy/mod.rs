//! Energy math module
//!
//! Pure arithmetic shared by the calculators: unit conversion, display
//! rounding, and TDEE estimation.

pub mod converter;
pub mod tdee;
pub mod units;

pub use converter::{convert, EnergyAmount};
pub use tdee::{estimate, mifflin_st_jeor, ActivityLevel, Sex, TdeeEstimate};
pub use units::{kcal_to_kj, kj_to_kcal, round_to, EnergyUnit, KJ_PER_KCAL};
