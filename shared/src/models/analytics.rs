//! Trend and yield-comparison classifiers
//!
//! Pure display-tier mappings used by the dashboard cards. Each classifier
//! returns a small data structure the renderer resolves, keeping tier
//! selection out of the rendering layer.

use serde::{Deserialize, Serialize};

/// Direction of a period-over-period change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increase,
    Decrease,
    Flat,
}

/// Display style for a trend direction
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendStyle {
    pub icon: &'static str,
    pub color_token: &'static str,
}

/// Classify a signed delta. Zero is always flat.
pub fn classify_trend(delta: f64) -> TrendDirection {
    if delta > 0.0 {
        TrendDirection::Increase
    } else if delta < 0.0 {
        TrendDirection::Decrease
    } else {
        TrendDirection::Flat
    }
}

/// Trend style lookup
pub fn trend_style(direction: TrendDirection) -> TrendStyle {
    match direction {
        TrendDirection::Increase => TrendStyle { icon: "trending-up", color_token: "emerald" },
        TrendDirection::Decrease => TrendStyle { icon: "trending-down", color_token: "rose" },
        TrendDirection::Flat => TrendStyle { icon: "minus", color_token: "gray" },
    }
}

/// Yield compared against the regional average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum YieldComparison {
    Above { percent: f64 },
    Below { percent: f64 },
    /// Average is zero or absent, so no comparison is shown
    NoBaseline,
}

/// Compare a yield value against an average.
///
/// A zero or missing average yields `NoBaseline` rather than dividing by
/// zero; the non-finite percentage the original footer badge produced was a
/// display defect.
pub fn compare_to_average(value: f64, average: Option<f64>) -> YieldComparison {
    let average = match average {
        Some(avg) if avg > 0.0 => avg,
        _ => return YieldComparison::NoBaseline,
    };
    let percent = ((value - average).abs() / average) * 100.0;
    if value >= average {
        YieldComparison::Above { percent }
    } else {
        YieldComparison::Below { percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_trend() {
        assert_eq!(classify_trend(2.5), TrendDirection::Increase);
        assert_eq!(classify_trend(-0.1), TrendDirection::Decrease);
        assert_eq!(classify_trend(0.0), TrendDirection::Flat);
    }

    #[test]
    fn test_trend_style() {
        assert_eq!(trend_style(TrendDirection::Increase).icon, "trending-up");
        assert_eq!(trend_style(TrendDirection::Decrease).color_token, "rose");
        assert_eq!(trend_style(TrendDirection::Flat).icon, "minus");
    }

    #[test]
    fn test_compare_above_average() {
        match compare_to_average(4.8, Some(4.0)) {
            YieldComparison::Above { percent } => assert!((percent - 20.0).abs() < 1e-9),
            other => panic!("expected Above, got {other:?}"),
        }
    }

    #[test]
    fn test_compare_below_average() {
        match compare_to_average(3.0, Some(4.0)) {
            YieldComparison::Below { percent } => assert!((percent - 25.0).abs() < 1e-9),
            other => panic!("expected Below, got {other:?}"),
        }
    }

    #[test]
    fn test_compare_equal_is_above_at_zero_percent() {
        match compare_to_average(4.0, Some(4.0)) {
            YieldComparison::Above { percent } => assert_eq!(percent, 0.0),
            other => panic!("expected Above, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_or_missing_average_has_no_baseline() {
        assert_eq!(compare_to_average(4.8, Some(0.0)), YieldComparison::NoBaseline);
        assert_eq!(compare_to_average(4.8, None), YieldComparison::NoBaseline);
        assert_eq!(compare_to_average(4.8, Some(-1.0)), YieldComparison::NoBaseline);
    }
}
