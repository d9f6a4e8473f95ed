//! TDEE calculator tool
//!
//! Validates the calculator's submitted fields, runs the estimate, and
//! renders the result text.

use serde::Serialize;

use crate::energy::tdee::{
    estimate, mifflin_st_jeor, ActivityLevel, Sex, MODERATE_RATE_KG_PER_WEEK,
    SLOW_RATE_KG_PER_WEEK,
};
use crate::energy::{round_to, TdeeEstimate};

use super::parse_finite;

/// Message shown when a numeric field fails validation
pub const INVALID_NUMBER_MESSAGE: &str =
    "Please fill in valid numbers for age, height, and weight.";

/// Raw field values from a TDEE submission
///
/// Sex and activity come from closed option sets so they arrive already
/// parsed; the numeric fields stay raw text until validated here.
#[derive(Debug, Clone)]
pub struct TdeeFields {
    pub sex: Sex,
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub activity: ActivityLevel,
}

/// Response for the tdee command
#[derive(Debug, Serialize)]
pub struct TdeeResponse {
    pub sex: Sex,
    pub age_years: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub activity_multiplier: f64,
    pub estimate: TdeeEstimate,
}

/// Response for the reset command
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    /// Whether a stored result was actually discarded
    pub cleared: bool,
}

/// Compute BMR, TDEE, and calorie targets from raw fields
///
/// Fails with the validation message when age, height, or weight is not a
/// finite number; no partial output is produced.
pub fn calculate(fields: &TdeeFields) -> Result<TdeeResponse, String> {
    let parsed = (
        parse_finite(&fields.age),
        parse_finite(&fields.height_cm),
        parse_finite(&fields.weight_kg),
    );
    let (age, height, weight) = match parsed {
        (Some(a), Some(h), Some(w)) => (a, h, w),
        _ => return Err(INVALID_NUMBER_MESSAGE.to_string()),
    };

    let bmr = mifflin_st_jeor(fields.sex, weight, height, age);
    let estimate = estimate(bmr, fields.activity.multiplier());

    Ok(TdeeResponse {
        sex: fields.sex,
        age_years: age,
        height_cm: height,
        weight_kg: weight,
        activity: fields.activity,
        activity_multiplier: fields.activity.multiplier(),
        estimate,
    })
}

/// Discard the stored result, reporting whether one existed
pub fn reset(stored: &mut Option<TdeeResponse>) -> ResetResponse {
    ResetResponse {
        cleared: stored.take().is_some(),
    }
}

impl TdeeResponse {
    /// Render the estimate as display text, whole kcal/day
    pub fn render(&self) -> String {
        let e = &self.estimate;
        let mut out = String::new();
        out.push_str(&format!("BMR: {:.0} kcal/day\n", round_to(e.bmr, 0)));
        out.push_str(&format!(
            "TDEE (maintain): {:.0} kcal/day\n",
            round_to(e.tdee, 0)
        ));
        out.push_str("Targets:\n");
        out.push_str(&format!(
            "  Lose slow: {:.0} kcal/day (~{} kg/week)\n",
            round_to(e.lose_slow, 0),
            SLOW_RATE_KG_PER_WEEK
        ));
        out.push_str(&format!(
            "  Lose moderate: {:.0} kcal/day (~{} kg/week)\n",
            round_to(e.lose_moderate, 0),
            MODERATE_RATE_KG_PER_WEEK
        ));
        out.push_str(&format!(
            "  Gain slow: {:.0} kcal/day (~{} kg/week)\n",
            round_to(e.gain_slow, 0),
            SLOW_RATE_KG_PER_WEEK
        ));
        out.push_str(&format!(
            "  Gain moderate: {:.0} kcal/day (~{} kg/week)",
            round_to(e.gain_moderate, 0),
            MODERATE_RATE_KG_PER_WEEK
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(age: &str, height: &str, weight: &str) -> TdeeFields {
        TdeeFields {
            sex: Sex::Male,
            age: age.to_string(),
            height_cm: height.to_string(),
            weight_kg: weight.to_string(),
            activity: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_calculate_male_moderate() {
        let resp = calculate(&fields("25", "175", "70")).unwrap();
        // 10*70 + 6.25*175 - 5*25 + 5 = 1673.75
        assert!((resp.estimate.bmr - 1673.75).abs() < 1e-9);
        assert!((resp.estimate.tdee - 2594.3125).abs() < 1e-9);
        assert_eq!(resp.activity_multiplier, 1.55);
    }

    #[test]
    fn test_calculate_female() {
        let resp = calculate(&TdeeFields {
            sex: Sex::Female,
            ..fields("30", "165", "60")
        })
        .unwrap();
        // 10*60 + 6.25*165 - 5*30 - 161 = 1320.25
        assert!((resp.estimate.bmr - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_age_yields_message() {
        let err = calculate(&fields("abc", "175", "70")).unwrap_err();
        assert_eq!(err, INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn test_missing_weight_yields_message() {
        let err = calculate(&fields("25", "175", "")).unwrap_err();
        assert_eq!(err, INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = calculate(&fields("25", "inf", "70")).unwrap_err();
        assert_eq!(err, INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn test_render_rounds_to_whole_kcal() {
        let resp = calculate(&fields("25", "175", "70")).unwrap();
        let text = resp.render();
        assert!(text.contains("BMR: 1674 kcal/day"));
        assert!(text.contains("TDEE (maintain): 2594 kcal/day"));
        assert!(text.contains("Lose slow: 2344 kcal/day (~0.25 kg/week)"));
        assert!(text.contains("Lose moderate: 2094 kcal/day (~0.5 kg/week)"));
        assert!(text.contains("Gain slow: 2844 kcal/day (~0.25 kg/week)"));
        assert!(text.contains("Gain moderate: 3094 kcal/day (~0.5 kg/week)"));
    }

    #[test]
    fn test_reset_reports_cleared() {
        let mut stored = Some(calculate(&fields("25", "175", "70")).unwrap());
        assert!(reset(&mut stored).cleared);
        assert!(stored.is_none());
        assert!(!reset(&mut stored).cleared);
    }
}
