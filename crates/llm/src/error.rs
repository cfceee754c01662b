//! Typed failures of the completion path.

use std::time::Duration;
use thiserror::Error;

/// A failed completion request. The caller's conversation state must
/// stay untouched when one of these surfaces.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The HTTP request to the completion endpoint failed.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The call exceeded the configured deadline.
    #[error("completion timed out after {0:?}")]
    Timeout(Duration),

    /// The endpoint answered with something that does not parse.
    #[error("malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl GenerationError {
    /// Whether a single retry is worth attempting.
    pub fn transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}
