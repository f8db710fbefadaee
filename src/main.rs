//! tictactoe-back binary entrypoint wiring the REST and GraphQL layers over the in-memory store.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tictactoe_back::{
    config::AppConfig, dao::game_store::InMemoryGameStore, routes, state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "info,tictactoe_back=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let addr = config.listen_addr();
    info!(%addr, playground = config.playground(), "starting server");

    let app = routes::app(AppState::new(Arc::new(InMemoryGameStore::new()), config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding server to {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    info!("server stopped");
    Ok(())
}

/// `RUST_LOG` wins; otherwise the crate logs at debug and everything else at info.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve on Ctrl+C, or SIGTERM on unix, logging which one stopped the server.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("received Ctrl+C, shutting down"),
                    _ = term.recv() => info!("received SIGTERM, shutting down"),
                }
                return;
            }
            Err(err) => warn!(error = %err, "SIGTERM handler unavailable, waiting for Ctrl+C only"),
        }
    }

    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Ctrl+C handler failed, shutting down");
        return;
    }
    info!("received Ctrl+C, shutting down");
}
