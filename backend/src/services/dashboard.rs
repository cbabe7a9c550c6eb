//! Dashboard overview service
//!
//! Assembles the fixture datasets into the shapes the overview, forecast,
//! and analysis pages render. The chart and map widgets consume the series
//! as plain arrays of points.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use shared::{
    classify_trend, compare_to_average, priority_style, trend_style, CropShare, CropYieldSummary,
    DistrictRecord, ForecastPoint, PriorityStyle, RainfallImpactPoint, Recommendation,
    RegionYieldRecord, TemperatureImpactPoint, TrendDirection, TrendStyle, WeatherImpactPoint,
    WeatherSummary, YieldComparison,
};

use crate::fixtures;

/// Overview page payload
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub weather: WeatherSummary,
    pub crop_yield: CropYieldSummary,
    pub yield_comparison: YieldComparison,
    pub trend: TrendDirection,
    pub trend_style: TrendStyle,
}

/// Analysis page payload: the four weather/crop relationship datasets
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisData {
    pub rainfall_impact: Vec<RainfallImpactPoint>,
    pub temperature_impact: Vec<TemperatureImpactPoint>,
    pub crop_distribution: Vec<CropShare>,
    pub region_comparison: Vec<RegionYieldRecord>,
}

/// A recommendation with its resolved priority style
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub style: PriorityStyle,
}

/// Dashboard service, stateless over fixture data
#[derive(Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn overview(&self) -> DashboardOverview {
        let weather = fixtures::weather_summary();
        let crop_yield = fixtures::crop_yield_summary();
        let average = fixtures::average_yield();

        let yield_value = crop_yield.yield_value.to_f64().unwrap_or(0.0);
        let average_value = average.to_f64();
        let trend = classify_trend(yield_value - average_value.unwrap_or(yield_value));

        DashboardOverview {
            weather,
            crop_yield,
            yield_comparison: compare_to_average(yield_value, average_value),
            trend,
            trend_style: trend_style(trend),
        }
    }

    pub fn districts(&self) -> Vec<DistrictRecord> {
        fixtures::districts()
    }

    pub fn forecast(&self) -> Vec<ForecastPoint> {
        fixtures::forecast_series()
    }

    pub fn weather_impact(&self) -> Vec<WeatherImpactPoint> {
        fixtures::weather_impact_series()
    }

    pub fn analysis(&self) -> AnalysisData {
        AnalysisData {
            rainfall_impact: fixtures::rainfall_impact_series(),
            temperature_impact: fixtures::temperature_impact_series(),
            crop_distribution: fixtures::crop_distribution(),
            region_comparison: fixtures::region_comparison(),
        }
    }

    pub fn recommendations(&self) -> Vec<RecommendationView> {
        fixtures::recommendations()
            .into_iter()
            .map(|recommendation| {
                let style = priority_style(Some(recommendation.priority));
                RecommendationView { recommendation, style }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_compares_against_regional_average() {
        let overview = DashboardService::new().overview();
        // Fixture yield 4.8 vs average 4.2
        match overview.yield_comparison {
            YieldComparison::Above { percent } => assert!(percent > 0.0),
            other => panic!("expected Above, got {other:?}"),
        }
        assert_eq!(overview.trend, TrendDirection::Increase);
    }

    #[test]
    fn test_series_lengths() {
        let service = DashboardService::new();
        assert_eq!(service.districts().len(), 10);
        assert_eq!(service.forecast().len(), 6);
        assert_eq!(service.weather_impact().len(), 12);
    }

    #[test]
    fn test_analysis_datasets_present() {
        let analysis = DashboardService::new().analysis();
        assert_eq!(analysis.rainfall_impact.len(), 18);
        assert_eq!(analysis.temperature_impact.len(), 10);
        assert_eq!(analysis.crop_distribution.len(), 5);
        assert_eq!(analysis.region_comparison.len(), 5);
    }

    #[test]
    fn test_recommendations_resolve_priority_styles() {
        let recommendations = DashboardService::new().recommendations();
        assert_eq!(recommendations.len(), 4);
        assert_eq!(recommendations[0].style.color_token, "emerald");
        assert_eq!(recommendations[3].style.label, "LOW");
    }
}
