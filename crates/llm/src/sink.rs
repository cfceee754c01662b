//! Token observability hook.
//!
//! Streamed tokens are a side channel for diagnostics; the full text
//! is still returned to the caller as one unit.

/// Receives generated tokens as they arrive from the stream.
pub trait TokenSink: Send + Sync {
    /// Called once per streamed content fragment.
    fn token(&self, token: &str);
}

/// Default sink: emits each token to the tracing layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TokenSink for LogSink {
    fn token(&self, token: &str) {
        tracing::info!("{token}");
    }
}

/// Sink that drops every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TokenSink for NullSink {
    fn token(&self, _token: &str) {}
}
