//! HTTP game server
//!
//! `GET /word`, `POST /validate` and `GET /health` over an axum router.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;


pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{app, game_router, game_router_generic};

use crate::service::GameService;
use crate::wordlists::WordStore;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Load the configured word list
///
/// A failed load is logged and yields an empty store, so the server still
/// starts and answers `GET /word` with "not ready".
pub async fn load_store(config: &ServerConfig) -> WordStore {
    let source = config.wordlist.clone();
    let loaded = tokio::task::spawn_blocking(move || source.load()).await;

    match loaded {
        Ok(Ok(store)) => {
            tracing::info!(
                source = %config.wordlist,
                words = store.len(),
                "Word list successfully processed"
            );
            if store.is_empty() {
                tracing::warn!(source = %config.wordlist, "Word list contains no words");
            }
            store
        }
        Ok(Err(e)) => {
            tracing::warn!(
                error = %e,
                "Word list failed to load, starting with an empty store"
            );
            WordStore::empty()
        }
        Err(e) => {
            tracing::error!(error = %e, "Word list loader task failed");
            WordStore::empty()
        }
    }
}

/// Run the game server until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(config: ServerConfig, store: WordStore) -> anyhow::Result<()> {
    let service = Arc::new(GameService::seeded(
        Arc::new(store),
        config.scrambler,
        config.seed,
    ));

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        scrambler = %service.scrambler(),
        words = service.store().len(),
        seeded = config.seed.is_some(),
        "Server is running at http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
