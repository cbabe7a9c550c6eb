//! Crop price estimation models
//!
//! The estimate request mirrors the three-step estimation form: crop and
//! location, growing conditions, and market factors. Fields other than the
//! required five are optional, and an unset numeric field is distinct from
//! zero (it contributes nothing to the formula).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DemandTier;

/// Model used to derive the estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "xgboost")]
    Xgboost,
    #[serde(rename = "random-forest")]
    RandomForest,
}

impl ModelChoice {
    /// Fixed R² score reported for the model
    pub fn accuracy(&self) -> f64 {
        match self {
            ModelChoice::Xgboost => 0.85,
            ModelChoice::RandomForest => 0.80,
        }
    }

    /// Multiplier applied to the raw price
    pub fn boost(&self) -> f64 {
        match self {
            ModelChoice::Xgboost => 1.05,
            ModelChoice::RandomForest => 1.0,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "xgboost" => Some(ModelChoice::Xgboost),
            "random-forest" => Some(ModelChoice::RandomForest),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelChoice::Xgboost => write!(f, "xgboost"),
            ModelChoice::RandomForest => write!(f, "random-forest"),
        }
    }
}

/// Inputs describing a crop/location/market scenario
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EstimateRequest {
    // Crop & location
    pub crop_name: Option<String>,
    pub crop_variety: Option<String>,
    pub region: Option<String>,
    /// Area sown in hectares
    pub area_sown: Option<f64>,
    pub year: Option<i32>,
    /// Calendar month, 1-12
    pub month: Option<u8>,

    // Growing conditions
    /// Rainfall in millimetres
    pub rainfall: Option<f64>,
    pub irrigated_percent: Option<f64>,
    /// Fertilizer used in kilograms
    pub fertilizer_used: Option<f64>,
    /// Expected yield in kg/hectare
    pub expected_yield: Option<f64>,

    // Market factors
    /// Minimum support price in rupees
    pub msp: Option<f64>,
    pub market_demand: Option<DemandTier>,
    pub export_demand: Option<DemandTier>,
    pub input_cost: Option<f64>,
    pub transport_cost: Option<f64>,
    pub govt_scheme_active: Option<bool>,
    pub cold_storage_available: Option<bool>,
    pub mandi_open: Option<bool>,

    pub model_choice: Option<ModelChoice>,
}

/// Derived price/accuracy/timing tuple for a submitted request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateResult {
    /// Predicted market price in rupees per quintal
    pub predicted_price: i64,
    pub model_r2_score: f64,
    pub elapsed_time_sec: f64,
}

/// Immutable snapshot of a saved estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEstimate {
    pub id: Uuid,
    pub crop: String,
    pub price: i64,
    pub date: NaiveDate,
}

/// Base price per quintal for the supported crops
pub fn base_price(crop: &str) -> f64 {
    match crop {
        "Wheat" => 1850.0,
        "Rice" => 2000.0,
        "Corn" => 1700.0,
        "Sugarcane" => 1400.0,
        "Cotton" => 2200.0,
        _ => 1800.0,
    }
}

/// Compute the predicted price for a request.
///
/// `noise` is the uniform random factor in [-50, 50); it is passed in rather
/// than drawn here so callers can seed it and tests can pin the output.
pub fn predicted_price(request: &EstimateRequest, noise: f64) -> i64 {
    let base = base_price(request.crop_name.as_deref().unwrap_or_default());
    let rainfall_factor = request.rainfall.unwrap_or(0.0) * 0.5;
    let demand_factor = request.market_demand.map_or(0.0, |d| f64::from(d.weight()) * 50.0);
    let export_factor = request.export_demand.map_or(0.0, |d| f64::from(d.weight()) * 30.0);
    let boost = request.model_choice.unwrap_or_default().boost();

    ((base + rainfall_factor + demand_factor + export_factor + noise) * boost).round() as i64
}
