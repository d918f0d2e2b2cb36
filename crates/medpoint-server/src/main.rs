//! HTTP server exposing the facility directory.

mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medpoint_core::{load_app_config, load_catalog};
use medpoint_directory::Directory;

use crate::api::{build_app, AppState};
use crate::middleware::RateLimitState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Arc::new(load_app_config()?);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let directory = Arc::new(Directory::load(&config.facilities_path)?);
    let catalog = Arc::new(load_catalog(&config.locales_dir)?);
    tracing::info!(
        facilities = directory.len(),
        env = %config.env,
        "facility roster loaded"
    );

    let state = AppState {
        directory,
        catalog,
        config: Arc::clone(&config),
    };
    let app = build_app(state, RateLimitState::default());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
