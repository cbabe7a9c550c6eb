//! WebAssembly module for the AgriDash platform
//!
//! Provides client-side computation for:
//! - Crop price estimation
//! - Estimate request validation
//! - Severity and trend classification for dashboard widgets

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compute the predicted price for an estimate request.
///
/// `noise` is the caller-supplied random factor in [-50, 50); drawing it on
/// the JavaScript side keeps this function deterministic.
#[wasm_bindgen]
pub fn estimate_price(request_json: &str, noise: f64) -> Result<i64, JsValue> {
    let request: EstimateRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;
    Ok(predicted_price(&request, noise))
}

/// Base price per quintal for a crop name
#[wasm_bindgen]
pub fn crop_base_price(crop: &str) -> f64 {
    base_price(crop)
}

/// Validate an estimate request; returns the first error message or null
#[wasm_bindgen]
pub fn validate_estimate_request(request_json: &str) -> Result<Option<String>, JsValue> {
    let request: EstimateRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;
    Ok(validate_estimate(&request).err())
}

/// Fixed R² score reported for a model name
#[wasm_bindgen]
pub fn model_accuracy(model: &str) -> Result<f64, JsValue> {
    ModelChoice::parse(model)
        .map(|m| m.accuracy())
        .ok_or_else(|| JsValue::from_str(&format!("Unknown model '{}'", model)))
}

/// Resolve the display style for a severity string
#[wasm_bindgen]
pub fn severity_display(severity: &str) -> Result<JsValue, JsValue> {
    let style = severity_style(SeverityTier::classify(severity));
    serde_wasm_value(&style)
}

/// Classify a yield delta as increasing, decreasing, or flat, with its
/// display style
#[wasm_bindgen]
pub fn trend_display(delta: f64) -> Result<JsValue, JsValue> {
    let style = trend_style(classify_trend(delta));
    serde_wasm_value(&style)
}

/// Compare a yield value to a regional average
#[wasm_bindgen]
pub fn yield_comparison(value: f64, average: Option<f64>) -> Result<JsValue, JsValue> {
    serde_wasm_value(&compare_to_average(value, average))
}

fn serde_wasm_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
    js_sys::JSON::parse(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_price() {
        let request = r#"{"crop_name":"Rice","rainfall":50.0,"market_demand":"medium","export_demand":"low","model_choice":"xgboost"}"#;
        assert_eq!(estimate_price(request, 0.0).unwrap(), 2263);
    }

    #[test]
    fn test_crop_base_price() {
        assert_eq!(crop_base_price("Cotton"), 2200.0);
        assert_eq!(crop_base_price("Barley"), 1800.0);
    }

    #[test]
    fn test_validate_estimate_request() {
        let missing_crop = r#"{"region":"Lucknow","year":2025,"month":6,"model_choice":"xgboost"}"#;
        let error = validate_estimate_request(missing_crop).unwrap();
        assert_eq!(error.as_deref(), Some("Please select a crop type."));

        let complete = r#"{"crop_name":"Rice","region":"Lucknow","year":2025,"month":6,"model_choice":"xgboost"}"#;
        assert_eq!(validate_estimate_request(complete).unwrap(), None);
    }

    #[test]
    fn test_model_accuracy() {
        assert_eq!(model_accuracy("xgboost").unwrap(), 0.85);
        assert_eq!(model_accuracy("random-forest").unwrap(), 0.80);
        // JsValue cannot be constructed outside a wasm runtime, so the
        // unknown-model case is asserted on the parser
        assert!(ModelChoice::parse("linear").is_none());
    }
}
