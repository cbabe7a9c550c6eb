//! AgriDash backend
//!
//! Agricultural intelligence dashboard for Uttar Pradesh: weather and yield
//! overviews, district analytics, crop price estimation, early warnings,
//! and an AI assistant bridge.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod fixtures;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{
    ChatService, DashboardService, EstimationService, PreferenceService, WarningService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard: DashboardService,
    pub warnings: WarningService,
    pub estimations: EstimationService,
    pub chat: ChatService,
    pub preferences: PreferenceService,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriDash API v1.0"
}
