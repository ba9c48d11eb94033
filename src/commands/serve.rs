//! Game server command

use crate::server::{self, ServerConfig};
use anyhow::Result;

/// Load the word list and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_serve(config: ServerConfig) -> Result<()> {
    tracing::info!(
        bind = %config.bind,
        wordlist = %config.wordlist,
        scrambler = %config.scrambler,
        "Starting word scramble server"
    );
    let store = server::load_store(&config).await;
    server::run(config, store).await
}
