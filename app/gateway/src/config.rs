//! Relay configuration.
//!
//! Credentials come from the process environment and are read once at
//! startup; the process refuses to start when any is missing. Prompt
//! and generation parameters are compiled-in constants.

use llm::GenerationConfig;
use thiserror::Error;

/// Persona instruction prepended to every rendered prompt.
pub const SYSTEM_PROMPT: &str = "You are a friendly assistant replying on behalf of this \
     messaging channel. Answer in the language of the user's message \
     and keep replies short and conversational.";

/// Model served by the completion endpoint.
pub const MODEL: &str = "gpt-3.5-turbo";

/// Upper bound on generated tokens.
pub const MAX_TOKENS: usize = 512;

/// Sampling temperature.
pub const TEMPERATURE: f32 = 0.2;

/// Default bind port, overridable through `PORT`.
pub const DEFAULT_PORT: u16 = 5000;

/// A startup configuration failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An optional variable is present but unusable.
    #[error("invalid value for {name}: {value}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Environment-provided relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Credential for the platform reply endpoint.
    pub channel_access_token: String,
    /// HMAC key for webhook signature verification.
    pub channel_secret: String,
    /// Credential for the completion endpoint.
    pub openai_api_key: String,
    /// Port to bind the HTTP server on.
    pub port: u16,
}

impl RelayConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            channel_access_token: require(&lookup, "CHANNEL_ACCESS_TOKEN")?,
            channel_secret: require(&lookup, "CHANNEL_SECRET")?,
            openai_api_key: require(&lookup, "OPENAI_API_KEY")?,
            port,
        })
    }

    /// The address the HTTP server binds on.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// The compiled-in generation parameters.
pub fn generation() -> GenerationConfig {
    GenerationConfig {
        model: MODEL.into(),
        tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

fn require(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
