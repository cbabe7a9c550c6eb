//! Route definitions for the AgriDash API

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard pages
        .nest("/dashboard", dashboard_routes())
        // Early warnings
        .nest("/warnings", warning_routes())
        // Crop price estimation workflow
        .nest("/estimations", estimation_routes())
        // Assistant chat
        .nest("/chat", chat_routes())
        // Settings and account state
        .nest("/settings", settings_routes())
        // Help page
        .route("/help/faqs", get(handlers::list_faqs))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(handlers::get_dashboard_overview))
        .route("/districts", get(handlers::get_districts))
        .route("/forecast", get(handlers::get_forecast))
        .route("/weather-impact", get(handlers::get_weather_impact))
        .route("/analysis", get(handlers::get_analysis))
        .route("/recommendations", get(handlers::get_recommendations))
}

/// Warning routes
fn warning_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_warnings))
        .route("/:warning_id", get(handlers::get_warning))
}

/// Estimation workflow routes
fn estimation_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_estimation_session))
        .route("/:session_id", get(handlers::get_estimation_session))
        .route("/:session_id/fields", put(handlers::update_estimation_field))
        .route("/:session_id/step", put(handlers::go_to_estimation_step))
        .route("/:session_id/submit", post(handlers::submit_estimation))
        .route("/:session_id/saved", post(handlers::save_estimate))
        .route("/:session_id/export", get(handlers::export_saved_estimates))
}

/// Chat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(handlers::create_chat_session))
        .route("/sessions/:session_id", get(handlers::get_chat_messages))
        .route("/sessions/:session_id/messages", post(handlers::send_chat_message))
        .route("/sessions/:session_id/clear", post(handlers::clear_chat_session))
        .route("/suggestions", get(handlers::get_suggested_questions))
}

/// Settings routes
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/theme", get(handlers::get_theme).put(handlers::set_theme))
        .route("/session", get(handlers::get_account_session))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route(
            "/chat-api",
            get(handlers::get_chat_api_config).put(handlers::set_chat_api_config),
        )
}
