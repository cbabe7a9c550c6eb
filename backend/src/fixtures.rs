//! Static sample datasets rendered by the dashboard pages
//!
//! Read-only fixture data standing in for a real data source. Values match
//! the Uttar Pradesh sample scenario the dashboard ships with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{
    CropShare, CropYieldSummary, DistrictRecord, FaqEntry, ForecastPoint, HazardType,
    PriorityTier, RainfallImpactPoint, Recommendation, RecommendationCategory, RegionYieldRecord,
    SeverityTier, TemperatureImpactPoint, Warning, WeatherImpactPoint, WeatherSummary,
};

fn dec(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Current weather summary card
pub fn weather_summary() -> WeatherSummary {
    WeatherSummary {
        temperature_celsius: dec(32, 0),
        rainfall_mm: dec(45, 0),
        humidity_percent: dec(78, 0),
        location: "Lucknow, UP".to_string(),
    }
}

/// Crop yield summary card
pub fn crop_yield_summary() -> CropYieldSummary {
    CropYieldSummary {
        crop_type: "Rice".to_string(),
        yield_value: dec(48, 1),
        unit: "t/ha".to_string(),
        season: "Kharif".to_string(),
        year: 2025,
    }
}

/// Regional average yield used for the summary card comparison badge, t/ha
pub fn average_yield() -> Decimal {
    dec(42, 1)
}

/// District map data
pub fn districts() -> Vec<DistrictRecord> {
    let rows: [(&str, &str, i64, i64); 10] = [
        ("D01", "Agra", 38, 35),
        ("D02", "Aligarh", 42, 40),
        ("D03", "Allahabad", 36, 55),
        ("D04", "Azamgarh", 47, 65),
        ("D05", "Bareilly", 32, 30),
        ("D06", "Gorakhpur", 45, 60),
        ("D07", "Jhansi", 28, 25),
        ("D08", "Kanpur", 39, 45),
        ("D09", "Lucknow", 41, 50),
        ("D10", "Meerut", 43, 55),
    ];
    rows.iter()
        .map(|(id, name, crop_yield, rainfall)| DistrictRecord {
            id: id.to_string(),
            name: name.to_string(),
            crop_yield: dec(*crop_yield, 1),
            rainfall_mm: dec(*rainfall, 0),
        })
        .collect()
}

/// Six-month yield forecast with confidence bounds
pub fn forecast_series() -> Vec<ForecastPoint> {
    let rows: [(&str, i64, i64, i64, i64); 6] = [
        ("Jan", 35, 32, 32, 38),
        ("Feb", 38, 35, 35, 41),
        ("Mar", 42, 39, 39, 45),
        ("Apr", 45, 41, 42, 48),
        ("May", 47, 43, 44, 50),
        ("Jun", 43, 40, 40, 46),
    ];
    rows.iter()
        .map(|(name, prediction, historical, lower, upper)| ForecastPoint {
            name: name.to_string(),
            prediction: dec(*prediction, 1),
            historical: dec(*historical, 1),
            confidence_lower: dec(*lower, 1),
            confidence_upper: dec(*upper, 1),
        })
        .collect()
}

/// Monthly rainfall and temperature series for the impact chart
pub fn weather_impact_series() -> Vec<WeatherImpactPoint> {
    let rows: [(&str, i64, i64); 12] = [
        ("Jan", 20, 16),
        ("Feb", 25, 18),
        ("Mar", 30, 22),
        ("Apr", 35, 26),
        ("May", 45, 32),
        ("Jun", 150, 34),
        ("Jul", 200, 33),
        ("Aug", 180, 32),
        ("Sep", 100, 30),
        ("Oct", 50, 28),
        ("Nov", 30, 24),
        ("Dec", 20, 18),
    ];
    rows.iter()
        .map(|(month, rainfall, temperature)| WeatherImpactPoint {
            month: month.to_string(),
            rainfall_mm: dec(*rainfall, 0),
            temperature_celsius: dec(*temperature, 0),
        })
        .collect()
}

/// Rainfall-vs-yield scatter series for the analysis page. Yield rises to a
/// peak around 110mm, then waterlogging pulls it back down.
pub fn rainfall_impact_series() -> Vec<RainfallImpactPoint> {
    let rows: [(i64, i64); 18] = [
        (10, 21),
        (20, 25),
        (30, 30),
        (40, 34),
        (50, 37),
        (60, 40),
        (70, 42),
        (80, 43),
        (90, 44),
        (100, 45),
        (110, 46),
        (120, 45),
        (140, 44),
        (160, 43),
        (180, 41),
        (200, 38),
        (220, 35),
        (240, 32),
    ];
    rows.iter()
        .map(|(rainfall, yield_value)| RainfallImpactPoint {
            rainfall_mm: dec(*rainfall, 0),
            yield_value: dec(*yield_value, 1),
        })
        .collect()
}

/// Temperature-vs-yield series for the analysis page
pub fn temperature_impact_series() -> Vec<TemperatureImpactPoint> {
    let rows: [(i64, i64); 10] = [
        (15, 30),
        (18, 33),
        (21, 36),
        (24, 39),
        (27, 42),
        (30, 44),
        (33, 41),
        (36, 37),
        (39, 33),
        (42, 28),
    ];
    rows.iter()
        .map(|(temperature, yield_value)| TemperatureImpactPoint {
            temperature_celsius: dec(*temperature, 0),
            yield_value: dec(*yield_value, 1),
        })
        .collect()
}

/// Sown-area share per crop for the distribution chart; sums to 100
pub fn crop_distribution() -> Vec<CropShare> {
    let rows: [(&str, i64); 5] = [
        ("Rice", 42),
        ("Wheat", 28),
        ("Sugarcane", 15),
        ("Maize", 10),
        ("Pulses", 5),
    ];
    rows.iter()
        .map(|(name, percent)| CropShare {
            name: name.to_string(),
            percent: dec(*percent, 0),
        })
        .collect()
}

/// Per-region yield comparison rows
pub fn region_comparison() -> Vec<RegionYieldRecord> {
    let rows: [(&str, i64, i64, i64); 5] = [
        ("Eastern UP", 45, 38, 705),
        ("Western UP", 40, 42, 682),
        ("Central UP", 42, 40, 698),
        ("Bundelkhand", 35, 32, 605),
        ("Rohilkhand", 41, 39, 653),
    ];
    rows.iter()
        .map(|(name, rice, wheat, sugarcane)| RegionYieldRecord {
            name: name.to_string(),
            rice: dec(*rice, 1),
            wheat: dec(*wheat, 1),
            sugarcane: dec(*sugarcane, 1),
        })
        .collect()
}

/// Actionable recommendations for the farm dashboard card
pub fn recommendations() -> Vec<Recommendation> {
    let rows: [(u32, &str, PriorityTier, RecommendationCategory); 4] = [
        (
            1,
            "Consider delaying rice planting in Gorakhpur by 5-7 days due to expected heavy \
             rainfall.",
            PriorityTier::High,
            RecommendationCategory::Planting,
        ),
        (
            2,
            "Increase irrigation frequency in Jhansi district to mitigate drought conditions.",
            PriorityTier::High,
            RecommendationCategory::Irrigation,
        ),
        (
            3,
            "Prepare pest control measures in Aligarh as preventive action.",
            PriorityTier::Medium,
            RecommendationCategory::Pest,
        ),
        (
            4,
            "Eastern UP shows better yield potential for Kharif Rice compared to Western \
             districts.",
            PriorityTier::Low,
            RecommendationCategory::Planning,
        ),
    ];
    rows.iter()
        .map(|(id, text, priority, category)| Recommendation {
            id: *id,
            text: text.to_string(),
            priority: *priority,
            category: *category,
        })
        .collect()
}

/// Early warning records with mitigation actions
pub fn warnings() -> Vec<Warning> {
    vec![
        Warning {
            id: "W001".to_string(),
            hazard: HazardType::Flood,
            district: "Gorakhpur".to_string(),
            severity: SeverityTier::Critical,
            message: "Expected heavy rainfall exceeding 200mm in the next 72 hours. High \
                      probability of flooding in low-lying areas. Prepare for potential crop \
                      damage in rice fields."
                .to_string(),
            timeframe: "Expected in 72 hours".to_string(),
            date: date(2025, 6, 15),
            actions: vec![
                "Move farm equipment to higher ground".to_string(),
                "Strengthen field bunds and drainage systems".to_string(),
                "Harvest mature crops if possible".to_string(),
                "Secure grain storage facilities".to_string(),
            ],
        },
        Warning {
            id: "W002".to_string(),
            hazard: HazardType::Drought,
            district: "Jhansi".to_string(),
            severity: SeverityTier::High,
            message: "Prolonged dry spell expected to continue for 2 weeks. Soil moisture \
                      levels critically low. Irrigation resources may be strained."
                .to_string(),
            timeframe: "Ongoing, expected for 14 more days".to_string(),
            date: date(2025, 5, 20),
            actions: vec![
                "Implement water conservation measures".to_string(),
                "Prioritize irrigation for critical growth stages".to_string(),
                "Consider mulching to reduce evaporation".to_string(),
                "Monitor crop stress indicators daily".to_string(),
            ],
        },
        Warning {
            id: "W003".to_string(),
            hazard: HazardType::Pest,
            district: "Aligarh".to_string(),
            severity: SeverityTier::Medium,
            message: "Locust swarm reported in neighboring regions. Current weather conditions \
                      favor rapid reproduction and movement toward Aligarh district."
                .to_string(),
            timeframe: "Potential risk in 4-5 days".to_string(),
            date: date(2025, 6, 10),
            actions: vec![
                "Monitor fields for early detection".to_string(),
                "Prepare pest control measures".to_string(),
                "Coordinate with local agriculture department".to_string(),
                "Consider preventive spraying in border areas".to_string(),
            ],
        },
        Warning {
            id: "W004".to_string(),
            hazard: HazardType::Heatwave,
            district: "Kanpur".to_string(),
            severity: SeverityTier::Medium,
            message: "Heatwave conditions predicted with temperatures exceeding 42\u{b0}C for \
                      5-7 days. May cause heat stress in crops, particularly during flowering \
                      stages."
                .to_string(),
            timeframe: "Expected to begin in 3 days".to_string(),
            date: date(2025, 5, 25),
            actions: vec![
                "Increase irrigation frequency".to_string(),
                "Apply light irrigation during hottest part of day".to_string(),
                "Use shade nets for sensitive crops".to_string(),
                "Apply foliar sprays to reduce transpiration".to_string(),
            ],
        },
        Warning {
            id: "W005".to_string(),
            hazard: HazardType::Wind,
            district: "Meerut".to_string(),
            severity: SeverityTier::Low,
            message: "Strong winds (40-50 km/h) expected during next week. May affect tall \
                      crops like maize and sugarcane."
                .to_string(),
            timeframe: "Starting in 5 days".to_string(),
            date: date(2025, 6, 5),
            actions: vec![
                "Provide support structures for tall crops".to_string(),
                "Delay fertilizer application".to_string(),
                "Ensure irrigation systems are secured".to_string(),
                "Monitor for lodging in grain crops".to_string(),
            ],
        },
    ]
}

/// Help page FAQ entries
pub fn faqs() -> Vec<FaqEntry> {
    let rows: [(&str, &str); 6] = [
        (
            "How accurate are the crop yield predictions?",
            "Our crop yield predictions are based on historical data, current weather patterns, \
             and machine learning models. They typically have an accuracy of 85-90% for most \
             regions and crops. Accuracy may vary based on unusual weather events or other \
             unforeseen factors.",
        ),
        (
            "How often is weather data updated?",
            "Weather data is updated hourly for current conditions and every 6 hours for \
             forecasts. Historical weather data is compiled daily. You can check the last \
             update timestamp at the bottom of each weather card.",
        ),
        (
            "Can I export data from the dashboard?",
            "Yes, you can export data in CSV, Excel, or PDF formats. Look for the export \
             button in the top-right corner of each chart or table. You can choose to export \
             specific data points or entire datasets.",
        ),
        (
            "How do I interpret the weather impact charts?",
            "Weather impact charts show the correlation between specific weather events and \
             crop yields. Blue areas indicate positive impacts (increased yield), while red \
             areas indicate negative impacts (decreased yield). The intensity of the color \
             represents the strength of the correlation.",
        ),
        (
            "What regions are covered by the dashboard?",
            "Our dashboard currently covers major agricultural regions in North America, \
             Europe, and parts of Asia. We're continuously expanding our coverage to include \
             more regions globally. You can check specific coverage details in the region \
             selection dropdown.",
        ),
        (
            "How do I set up alerts and notifications?",
            "Navigate to Settings > Notifications to configure alerts for weather warnings, \
             yield predictions, and data updates. You can choose to receive notifications via \
             email, SMS, or in-app notifications.",
        ),
    ];
    rows.iter()
        .map(|(question, answer)| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

/// Suggested first questions for the chat page
pub fn suggested_questions() -> Vec<String> {
    [
        "How can I improve my rice crop yield this season?",
        "What should I watch for with the upcoming weather changes?",
        "How do I identify and treat common crop pests?",
        "What's the best irrigation schedule for wheat in dry conditions?",
        "How can I improve my soil health naturally?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_fixture_shape() {
        let districts = districts();
        assert_eq!(districts.len(), 10);
        assert_eq!(districts[8].name, "Lucknow");
        assert_eq!(districts[8].crop_yield, dec(41, 1));
    }

    #[test]
    fn test_forecast_bounds_bracket_prediction() {
        for point in forecast_series() {
            assert!(point.confidence_lower <= point.prediction);
            assert!(point.prediction <= point.confidence_upper);
        }
    }

    #[test]
    fn test_crop_distribution_sums_to_hundred() {
        let total: Decimal = crop_distribution().iter().map(|share| share.percent).sum();
        assert_eq!(total, dec(100, 0));
    }

    #[test]
    fn test_rainfall_impact_peaks_then_declines() {
        let series = rainfall_impact_series();
        assert_eq!(series.len(), 18);
        let peak = series.iter().map(|p| p.yield_value).max().unwrap();
        assert_eq!(peak, dec(46, 1));
        // Waterlogging tail: the last point is below the peak
        assert!(series.last().unwrap().yield_value < peak);
    }

    #[test]
    fn test_recommendations_carry_priorities() {
        let recommendations = recommendations();
        assert_eq!(recommendations.len(), 4);
        assert_eq!(recommendations[0].priority, PriorityTier::High);
        assert_eq!(recommendations[3].priority, PriorityTier::Low);
    }

    #[test]
    fn test_warning_severities_cover_all_tiers() {
        let warnings = warnings();
        assert_eq!(warnings.len(), 5);
        assert!(warnings.iter().any(|w| w.severity == SeverityTier::Critical));
        assert!(warnings.iter().any(|w| w.severity == SeverityTier::Low));
        assert!(warnings.iter().all(|w| !w.actions.is_empty()));
    }
}
