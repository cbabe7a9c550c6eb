//! Validation utilities for the AgriDash platform

use crate::models::EstimateRequest;

/// Supported estimation years
pub const MIN_ESTIMATE_YEAR: i32 = 2020;
pub const MAX_ESTIMATE_YEAR: i32 = 2025;

/// Validate an estimate request before submission.
///
/// Returns the first failure as a single human-readable message; the form
/// surfaces it inline and there are no structured field-level errors.
pub fn validate_estimate(request: &EstimateRequest) -> Result<(), String> {
    if request.crop_name.as_deref().unwrap_or("").is_empty() {
        return Err("Please select a crop type.".to_string());
    }
    if request.region.as_deref().unwrap_or("").is_empty() {
        return Err("Please select a region.".to_string());
    }
    match request.year {
        Some(year) if (MIN_ESTIMATE_YEAR..=MAX_ESTIMATE_YEAR).contains(&year) => {}
        _ => {
            return Err(format!(
                "Please enter a valid year between {MIN_ESTIMATE_YEAR} and {MAX_ESTIMATE_YEAR}."
            ))
        }
    }
    match request.month {
        Some(month) if (1..=12).contains(&month) => {}
        _ => return Err("Please select a month.".to_string()),
    }
    if request.model_choice.is_none() {
        return Err("Please select a prediction model.".to_string());
    }
    Ok(())
}
