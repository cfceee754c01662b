//! Streaming response chunks and SSE frame parsing.

use serde::Deserialize;

/// A streaming chat completion chunk
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StreamChunk {
    /// The list of completion choices (with delta content)
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

impl StreamChunk {
    /// Get the content of the first choice
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Get the reason the model stopped generating
    pub fn reason(&self) -> Option<FinishReason> {
        self.choices.first().and_then(|choice| choice.finish_reason)
    }
}

/// A completion choice carried by a stream chunk
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StreamChoice {
    /// The incremental content
    #[serde(default)]
    pub delta: Delta,

    /// The reason the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// The incremental content of a stream chunk
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Delta {
    /// The content fragment, if any
    #[serde(default)]
    pub content: Option<String>,
}

/// The reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the completion
    Stop,
    /// The max token budget was reached
    Length,
    /// The content was filtered
    ContentFilter,
    /// Any other reason
    #[serde(other)]
    Other,
}

/// Parse the chunks contained in one SSE payload fragment.
///
/// Frames are `data: {json}` lines; the terminal `[DONE]` marker and
/// unparseable frames are skipped (the latter with a warning).
pub fn parse_frames(text: &str) -> Vec<StreamChunk> {
    text.split("data: ")
        .skip(1)
        .map(str::trim)
        .filter(|data| !data.is_empty() && !data.starts_with("[DONE]"))
        .filter_map(|data| match serde_json::from_str(data) {
            Ok(chunk) => Some(chunk),
            Err(e) => {
                tracing::warn!("failed to parse stream chunk: {e}, data: {data}");
                None
            }
        })
        .collect()
}
