//! Unit converter tool
//!
//! Converts a submitted value between kilocalories and kilojoules.

use serde::Serialize;

use crate::energy::{convert, round_to, EnergyUnit};

use super::parse_finite;

/// Message shown when the value fails validation
pub const INVALID_VALUE_MESSAGE: &str = "Enter a valid number to convert.";

/// Raw field values from a converter submission
#[derive(Debug, Clone)]
pub struct ConvertFields {
    pub value: String,
    pub from: EnergyUnit,
    pub to: EnergyUnit,
}

/// Response for the convert command
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub input: f64,
    pub from: EnergyUnit,
    pub to: EnergyUnit,
    /// Converted value rounded to three decimals
    pub result: f64,
}

/// Convert a value between energy units
///
/// The displayed result is rounded to three decimal places. Fails with the
/// validation message when the value is not a finite number.
pub fn convert_value(fields: &ConvertFields) -> Result<ConvertResponse, String> {
    let value = match parse_finite(&fields.value) {
        Some(v) => v,
        None => return Err(INVALID_VALUE_MESSAGE.to_string()),
    };

    let result = round_to(convert(value, fields.from, fields.to), 3);
    Ok(ConvertResponse {
        input: value,
        from: fields.from,
        to: fields.to,
        result,
    })
}

impl ConvertResponse {
    /// Render as a labeled result, e.g. "2092.000 kJ"
    pub fn render(&self) -> String {
        format!("{:.3} {}", self.result, self.to.as_str())
    }
}
