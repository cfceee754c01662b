//! The non-streaming response body for the chat completions API

use serde::Deserialize;
use wcore::Message;

/// A chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// The list of completion choices
    pub choices: Vec<ResponseChoice>,
}

impl Response {
    /// Get the content of the first choice
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseChoice {
    /// The generated message
    pub message: Message,

    /// The reason the model stopped generating
    pub finish_reason: Option<crate::FinishReason>,
}
