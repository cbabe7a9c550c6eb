//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// UI theme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Demand tier for market and export demand inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DemandTier {
    Low,
    Medium,
    High,
}

impl DemandTier {
    /// Numeric weight used by the price formula (1, 2, 3)
    pub fn weight(&self) -> u8 {
        match self {
            DemandTier::Low => 1,
            DemandTier::Medium => 2,
            DemandTier::High => 3,
        }
    }

    pub fn from_weight(weight: u8) -> Option<Self> {
        match weight {
            1 => Some(DemandTier::Low),
            2 => Some(DemandTier::Medium),
            3 => Some(DemandTier::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for DemandTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandTier::Low => write!(f, "Low"),
            DemandTier::Medium => write!(f, "Medium"),
            DemandTier::High => write!(f, "High"),
        }
    }
}
