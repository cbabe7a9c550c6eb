//! AgriDash - Backend Server

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agridash_backend::external::AssistantClient;
use agridash_backend::services::{
    ChatService, DashboardService, EstimationService, PreferenceService, WarningService,
};
use agridash_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agridash_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriDash Server");
    tracing::info!("Environment: {}", config.environment);

    // Create application state
    let preferences = PreferenceService::in_memory();
    let assistant = AssistantClient::new(&config.assistant);
    let state = AppState {
        dashboard: DashboardService::new(),
        warnings: WarningService::new(),
        estimations: EstimationService::new(config.estimation.simulated_delay_ms),
        chat: ChatService::new(assistant, preferences.clone()),
        preferences,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
