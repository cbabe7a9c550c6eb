//! HTTP handlers for the dashboard pages

use axum::{extract::State, Json};

use shared::{DistrictRecord, ForecastPoint, WeatherImpactPoint};

use crate::services::dashboard::{AnalysisData, DashboardOverview, RecommendationView};
use crate::AppState;

/// Overview cards: weather, crop yield, and the comparison to the
/// regional average
pub async fn get_dashboard_overview(State(state): State<AppState>) -> Json<DashboardOverview> {
    Json(state.dashboard.overview())
}

/// District-level yield table for the map page
pub async fn get_districts(State(state): State<AppState>) -> Json<Vec<DistrictRecord>> {
    Json(state.dashboard.districts())
}

/// Six-month forecast series with confidence bounds
pub async fn get_forecast(State(state): State<AppState>) -> Json<Vec<ForecastPoint>> {
    Json(state.dashboard.forecast())
}

/// Twelve-month weather impact series
pub async fn get_weather_impact(State(state): State<AppState>) -> Json<Vec<WeatherImpactPoint>> {
    Json(state.dashboard.weather_impact())
}

/// Analysis page datasets: rainfall/temperature impact, crop distribution,
/// and the per-region comparison
pub async fn get_analysis(State(state): State<AppState>) -> Json<AnalysisData> {
    Json(state.dashboard.analysis())
}

/// Actionable recommendations for the farm dashboard card
pub async fn get_recommendations(State(state): State<AppState>) -> Json<Vec<RecommendationView>> {
    Json(state.dashboard.recommendations())
}
