//! Relay binary entry point.
//!
//! Reads credentials from the environment (failing fast when any is
//! missing), wires the provider, handler, and reply client, and runs
//! the axum server with graceful shutdown on ctrl-c.

use anyhow::Result;
use llm::{LogSink, OpenAi, reqwest::Client};
use pelican_gateway::{AppState, ConversationHandler, LineReply, RelayConfig, config, router};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Fail fast on missing credentials, before serving any request.
    let config = RelayConfig::from_env()?;

    let client = Client::new();
    let provider = OpenAi::new(client.clone(), &config.openai_api_key)?;
    let replies = LineReply::new(client, &config.channel_access_token)?;

    let handler = ConversationHandler::new(
        provider,
        config::generation(),
        config::SYSTEM_PROMPT,
        LogSink,
    );
    let state = AppState {
        handler: Arc::new(handler),
        replies,
        channel_secret: config.channel_secret.clone(),
    };

    let app = router(state);
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("relay listening on {bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("relay shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("received shutdown signal");
}
