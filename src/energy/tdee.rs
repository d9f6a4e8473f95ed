//! TDEE estimation
//!
//! Mifflin-St Jeor basal metabolic rate, activity multipliers, and derived
//! daily calorie targets.

use serde::{Deserialize, Serialize};

/// Daily calorie adjustment for the slow rate
pub const SLOW_RATE_KCAL: f64 = 250.0;
/// Daily calorie adjustment for the moderate rate
pub const MODERATE_RATE_KCAL: f64 = 500.0;

/// Approximate weekly weight change at the slow rate, used as a display label
pub const SLOW_RATE_KG_PER_WEEK: f64 = 0.25;
/// Approximate weekly weight change at the moderate rate, used as a display label
pub const MODERATE_RATE_KG_PER_WEEK: f64 = 0.5;

/// Biological sex for the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Get the label for this sex
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Activity level with its TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels in increasing activity order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the multiplier applied to BMR for this level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get the level name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse from a level name or its exact multiplier text
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "1.2" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" | "1.375" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" | "1.55" => Some(ActivityLevel::Moderate),
            "active" | "1.725" => Some(ActivityLevel::Active),
            "very_active" | "1.9" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

/// Compute basal metabolic rate in kcal/day using Mifflin-St Jeor
///
/// male:   10w + 6.25h - 5a + 5
/// female: 10w + 6.25h - 5a - 161
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// A complete estimate: BMR, TDEE, and the derived calorie targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TdeeEstimate {
    pub bmr: f64,
    pub tdee: f64,
    pub lose_slow: f64,
    pub lose_moderate: f64,
    pub gain_slow: f64,
    pub gain_moderate: f64,
}

/// Derive TDEE and calorie targets from a BMR and an activity multiplier
pub fn estimate(bmr: f64, activity_multiplier: f64) -> TdeeEstimate {
    let tdee = bmr * activity_multiplier;
    TdeeEstimate {
        bmr,
        tdee,
        lose_slow: tdee - SLOW_RATE_KCAL,
        lose_moderate: tdee - MODERATE_RATE_KCAL,
        gain_slow: tdee + SLOW_RATE_KCAL,
        gain_moderate: tdee + MODERATE_RATE_KCAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        // 10*70 + 6.25*175 - 5*30 + 5
        let bmr = mifflin_st_jeor(Sex::Male, 70.0, 175.0, 30.0);
        assert!((bmr - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        // 10*60 + 6.25*165 - 5*25 - 161
        let bmr = mifflin_st_jeor(Sex::Female, 60.0, 165.0, 25.0);
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_sex_offset() {
        // The two formulas differ by a constant 166 kcal/day
        let male = mifflin_st_jeor(Sex::Male, 80.0, 180.0, 40.0);
        let female = mifflin_st_jeor(Sex::Female, 80.0, 180.0, 40.0);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_targets() {
        // BMR 1673.75 at moderate activity
        let est = estimate(1673.75, 1.55);
        assert!((est.tdee - 2594.3125).abs() < 1e-9);
        assert!((est.lose_slow - 2344.3125).abs() < 1e-9);
        assert!((est.lose_moderate - 2094.3125).abs() < 1e-9);
        assert!((est.gain_slow - 2844.3125).abs() < 1e-9);
        assert!((est.gain_moderate - 3094.3125).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_preserves_bmr() {
        let est = estimate(1500.0, 1.2);
        assert_eq!(est.bmr, 1500.0);
        assert!((est.tdee - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.9);
    }

    #[test]
    fn test_activity_from_str() {
        assert_eq!(
            ActivityLevel::from_str("moderate"),
            Some(ActivityLevel::Moderate)
        );
        assert_eq!(
            ActivityLevel::from_str("Sedentary"),
            Some(ActivityLevel::Sedentary)
        );
        assert_eq!(
            ActivityLevel::from_str("very_active"),
            Some(ActivityLevel::VeryActive)
        );
        assert_eq!(ActivityLevel::from_str("couch"), None);
    }

    #[test]
    fn test_activity_from_multiplier_text() {
        // The exact multiplier text is an alias for its level
        assert_eq!(ActivityLevel::from_str("1.55"), Some(ActivityLevel::Moderate));
        assert_eq!(ActivityLevel::from_str("1.9"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_str("1.5"), None);
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!(Sex::from_str("male"), Some(Sex::Male));
        assert_eq!(Sex::from_str("F"), Some(Sex::Female));
        assert_eq!(Sex::from_str("other"), None);
    }
}
