//! Early warning models and severity classification

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hazard categories covered by the early warning system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Flood,
    Drought,
    Pest,
    Heatwave,
    Wind,
}

/// Warning urgency tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Critical,
    High,
    Medium,
    Low,
}

impl SeverityTier {
    /// Classify a raw severity string; anything unrecognized maps to `None`,
    /// which callers render with the default style.
    pub fn classify(value: &str) -> Option<Self> {
        match value {
            "critical" => Some(SeverityTier::Critical),
            "high" => Some(SeverityTier::High),
            "medium" => Some(SeverityTier::Medium),
            "low" => Some(SeverityTier::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityTier::Critical => write!(f, "critical"),
            SeverityTier::High => write!(f, "high"),
            SeverityTier::Medium => write!(f, "medium"),
            SeverityTier::Low => write!(f, "low"),
        }
    }
}

/// Display style for a severity tier: a label plus a color token the
/// renderer resolves, instead of conditional class names at the call site.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SeverityStyle {
    pub label: &'static str,
    pub color_token: &'static str,
}

/// Severity style lookup. Unrecognized tiers get the default style.
pub fn severity_style(tier: Option<SeverityTier>) -> SeverityStyle {
    match tier {
        Some(SeverityTier::Critical) => SeverityStyle { label: "CRITICAL", color_token: "red" },
        Some(SeverityTier::High) => SeverityStyle { label: "HIGH", color_token: "orange" },
        Some(SeverityTier::Medium) => SeverityStyle { label: "MEDIUM", color_token: "amber" },
        Some(SeverityTier::Low) => SeverityStyle { label: "LOW", color_token: "yellow" },
        None => SeverityStyle { label: "UNKNOWN", color_token: "gray" },
    }
}

/// A single early warning record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub id: String,
    pub hazard: HazardType,
    pub district: String,
    pub severity: SeverityTier,
    pub message: String,
    pub timeframe: String,
    pub date: NaiveDate,
    /// Recommended mitigation actions, in priority order
    pub actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tiers() {
        assert_eq!(SeverityTier::classify("critical"), Some(SeverityTier::Critical));
        assert_eq!(SeverityTier::classify("high"), Some(SeverityTier::High));
        assert_eq!(SeverityTier::classify("medium"), Some(SeverityTier::Medium));
        assert_eq!(SeverityTier::classify("low"), Some(SeverityTier::Low));
    }

    #[test]
    fn test_classify_unknown_returns_none() {
        assert_eq!(SeverityTier::classify("severe"), None);
        assert_eq!(SeverityTier::classify(""), None);
        assert_eq!(SeverityTier::classify("CRITICAL"), None);
    }

    #[test]
    fn test_severity_style_tiers() {
        assert_eq!(severity_style(Some(SeverityTier::Critical)).color_token, "red");
        assert_eq!(severity_style(Some(SeverityTier::High)).color_token, "orange");
        assert_eq!(severity_style(Some(SeverityTier::Medium)).color_token, "amber");
        assert_eq!(severity_style(Some(SeverityTier::Low)).color_token, "yellow");
    }

    #[test]
    fn test_severity_style_default() {
        let style = severity_style(None);
        assert_eq!(style.label, "UNKNOWN");
        assert_eq!(style.color_token, "gray");
    }
}
