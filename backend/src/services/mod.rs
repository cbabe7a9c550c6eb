//! Business logic services for the AgriDash platform

pub mod chat;
pub mod dashboard;
pub mod estimation;
pub mod preferences;
pub mod warning;

pub use chat::ChatService;
pub use dashboard::DashboardService;
pub use estimation::EstimationService;
pub use preferences::PreferenceService;
pub use warning::WarningService;

use chrono::{DateTime, Utc};

/// Time source injected into services so tests can pin timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time, for tests
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
