//! Calculator tools module
//!
//! One handler module per calculator surface, plus session status.

pub mod convert;
pub mod status;
pub mod tdee;
pub mod tracker;

/// Parse a submitted field as a finite number
///
/// The shared numeric-field rule: the trimmed text must parse and the value
/// must be finite. Infinities and NaN are rejected like any other bad input.
pub fn parse_finite(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
