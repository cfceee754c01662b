//! The request body for the chat completions API

use crate::GenerationConfig;
use serde::Serialize;
use wcore::Message;

/// The request body for the chat completions API
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model we are using
    pub model: String,

    /// The maximum number of tokens to generate
    pub max_tokens: usize,

    /// The temperature to use for the response
    pub temperature: f32,

    /// Whether to stream the response
    pub stream: bool,

    /// The messages to send to the API
    pub messages: Vec<Message>,
}

impl Request {
    /// Construct the messages for the request
    pub fn messages(&self, messages: &[Message]) -> Self {
        Self {
            messages: messages.to_vec(),
            ..self.clone()
        }
    }

    /// Enable streaming for the request
    pub fn stream(mut self) -> Self {
        self.stream = true;
        self
    }
}

impl From<&GenerationConfig> for Request {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.tokens,
            temperature: config.temperature,
            stream: false,
            messages: Vec::new(),
        }
    }
}
