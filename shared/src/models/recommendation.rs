//! Farm recommendation model
//!
//! Actionable insights shown on the farm dashboard card, each tagged with a
//! priority tier and a category.

use serde::{Deserialize, Serialize};

/// Priority tier of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Exact lowercase match; anything else is unrecognized
    pub fn classify(raw: &str) -> Option<Self> {
        match raw {
            "high" => Some(PriorityTier::High),
            "medium" => Some(PriorityTier::Medium),
            "low" => Some(PriorityTier::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityTier::High => write!(f, "high"),
            PriorityTier::Medium => write!(f, "medium"),
            PriorityTier::Low => write!(f, "low"),
        }
    }
}

/// Display style for a priority tier
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PriorityStyle {
    pub label: &'static str,
    pub color_token: &'static str,
}

/// Priority style lookup. Unrecognized tiers get the default style.
pub fn priority_style(tier: Option<PriorityTier>) -> PriorityStyle {
    match tier {
        Some(PriorityTier::High) => PriorityStyle { label: "HIGH", color_token: "emerald" },
        Some(PriorityTier::Medium) => PriorityStyle { label: "MEDIUM", color_token: "blue" },
        Some(PriorityTier::Low) => PriorityStyle { label: "LOW", color_token: "indigo" },
        None => PriorityStyle { label: "UNKNOWN", color_token: "gray" },
    }
}

/// What a recommendation is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Planting,
    Irrigation,
    Pest,
    Planning,
}

/// A single actionable recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub text: String,
    pub priority: PriorityTier,
    pub category: RecommendationCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tiers() {
        assert_eq!(PriorityTier::classify("high"), Some(PriorityTier::High));
        assert_eq!(PriorityTier::classify("medium"), Some(PriorityTier::Medium));
        assert_eq!(PriorityTier::classify("low"), Some(PriorityTier::Low));
    }

    #[test]
    fn test_classify_is_exact_lowercase() {
        assert_eq!(PriorityTier::classify("High"), None);
        assert_eq!(PriorityTier::classify("urgent"), None);
    }

    #[test]
    fn test_priority_style_lookup() {
        assert_eq!(priority_style(Some(PriorityTier::High)).color_token, "emerald");
        assert_eq!(priority_style(Some(PriorityTier::Low)).label, "LOW");
        assert_eq!(priority_style(None).color_token, "gray");
    }
}
