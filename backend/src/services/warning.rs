//! Early warning service over the fixture warning records

use shared::{severity_style, SeverityStyle, SeverityTier, Warning};

use crate::error::{AppError, AppResult};
use crate::fixtures;

/// A warning with its resolved display style
#[derive(Debug, Clone, serde::Serialize)]
pub struct WarningView {
    #[serde(flatten)]
    pub warning: Warning,
    pub style: SeverityStyle,
}

/// Warning service, read-only over fixture data
#[derive(Clone, Default)]
pub struct WarningService;

impl WarningService {
    pub fn new() -> Self {
        Self
    }

    /// List warnings, optionally filtered to one severity tier.
    ///
    /// An unrecognized tier string is a validation error rather than an
    /// empty result, so typos do not read as "no warnings".
    pub fn list(&self, severity: Option<&str>) -> AppResult<Vec<WarningView>> {
        let tier = match severity {
            None | Some("all") => None,
            Some(raw) => Some(SeverityTier::classify(raw).ok_or_else(|| {
                AppError::ValidationError(format!("Unknown severity tier '{}'.", raw))
            })?),
        };

        Ok(fixtures::warnings()
            .into_iter()
            .filter(|w| tier.map_or(true, |t| w.severity == t))
            .map(with_style)
            .collect())
    }

    pub fn get(&self, id: &str) -> AppResult<WarningView> {
        fixtures::warnings()
            .into_iter()
            .find(|w| w.id == id)
            .map(with_style)
            .ok_or_else(|| AppError::NotFound("Warning".to_string()))
    }
}

fn with_style(warning: Warning) -> WarningView {
    let style = severity_style(Some(warning.severity));
    WarningView { warning, style }
}
