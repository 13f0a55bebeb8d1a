//! Main entry point for the Textlab API

use std::sync::Arc;

use textlab_api::{api, config::Settings, store, AppState};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    init_tracing(&settings);

    info!("Starting Textlab API");
    info!(
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    let seed_path = settings.seed.path.clone();

    // Create application state
    let state = Arc::new(AppState::new(settings));

    // Preload collections from the seed file when configured
    if let Some(path) = seed_path {
        if std::path::Path::new(&path).exists() {
            match store::seed::load_seed(&path) {
                Ok(seed) => {
                    let (students, feedbacks) = store::seed::apply_seed(&state, seed);
                    info!(
                        students,
                        feedbacks,
                        path = %path,
                        "Seed data loaded"
                    );
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "Failed to load seed data");
                }
            }
        } else {
            warn!(path = %path, "Seed file not found, starting with empty collections");
        }
    }

    // Build the router
    let app = api::routes::create_router(state.clone()).await;

    // Get server address
    let addr = {
        let config = state.settings.read().await;
        format!("{}:{}", config.server.host, config.server.port)
    };

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if settings.logging.format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}
