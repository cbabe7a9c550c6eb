//! Domain models for the AgriDash platform

mod analytics;
mod chat;
mod dashboard;
mod estimate;
mod recommendation;
mod user;
mod warning;

pub use analytics::*;
pub use chat::*;
pub use dashboard::*;
pub use estimate::*;
pub use recommendation::*;
pub use user::*;
pub use warning::*;
