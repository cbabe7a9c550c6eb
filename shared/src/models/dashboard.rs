//! Dashboard fixture record types
//!
//! These are the shapes of the static sample datasets the dashboard pages
//! render. Chart widgets consume them as plain arrays of points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current weather summary card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature_celsius: Decimal,
    pub rainfall_mm: Decimal,
    pub humidity_percent: Decimal,
    pub location: String,
}

/// Crop yield summary card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropYieldSummary {
    pub crop_type: String,
    pub yield_value: Decimal,
    pub unit: String,
    pub season: String,
    pub year: i32,
}

/// Per-district yield and rainfall record for the map view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictRecord {
    pub id: String,
    pub name: String,
    pub crop_yield: Decimal,
    pub rainfall_mm: Decimal,
}

/// One point of the yield forecast series with confidence bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub name: String,
    pub prediction: Decimal,
    pub historical: Decimal,
    pub confidence_lower: Decimal,
    pub confidence_upper: Decimal,
}

/// One point of the monthly weather impact series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherImpactPoint {
    pub month: String,
    pub rainfall_mm: Decimal,
    pub temperature_celsius: Decimal,
}

/// Rainfall-vs-yield point for the analysis scatter chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainfallImpactPoint {
    pub rainfall_mm: Decimal,
    pub yield_value: Decimal,
}

/// Temperature-vs-yield point for the analysis chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureImpactPoint {
    pub temperature_celsius: Decimal,
    pub yield_value: Decimal,
}

/// Share of sown area per crop, as a percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropShare {
    pub name: String,
    pub percent: Decimal,
}

/// Per-region yield row for the comparison chart, t/ha
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionYieldRecord {
    pub name: String,
    pub rice: Decimal,
    pub wheat: Decimal,
    pub sugarcane: Decimal,
}

/// Help page FAQ entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
