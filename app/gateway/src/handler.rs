//! Conversation handler.
//!
//! Context windows are keyed by conversation id so concurrent users
//! never share history. The window lock is dropped across the
//! completion await; a failed generation leaves the window untouched.

use llm::{Completion, GenerationConfig, GenerationError, TokenSink};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::time::Duration;
use wcore::{ConversationWindow, DEFAULT_EXCHANGES, Message};

/// Deadline for one completion attempt.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Handles one inbound message: render, generate, append.
pub struct ConversationHandler<P: Completion, S: TokenSink> {
    provider: P,
    config: GenerationConfig,
    system_prompt: String,
    window_cap: usize,
    sink: S,
    windows: Mutex<BTreeMap<String, ConversationWindow>>,
}

impl<P: Completion, S: TokenSink> ConversationHandler<P, S> {
    /// Create a handler with the default window cap.
    pub fn new(
        provider: P,
        config: GenerationConfig,
        system_prompt: impl Into<String>,
        sink: S,
    ) -> Self {
        Self {
            provider,
            config,
            system_prompt: system_prompt.into(),
            window_cap: DEFAULT_EXCHANGES,
            sink,
            windows: Mutex::new(BTreeMap::new()),
        }
    }

    /// Override the number of retained exchanges per conversation.
    pub fn with_window_cap(mut self, cap: usize) -> Self {
        self.window_cap = cap;
        self
    }

    /// Snapshot of one conversation's window (empty when absent).
    pub fn window(&self, conversation: &str) -> ConversationWindow {
        self.windows
            .lock()
            .get(conversation)
            .cloned()
            .unwrap_or_else(|| ConversationWindow::new(self.window_cap))
    }

    /// Handle one message for a conversation and return the reply.
    ///
    /// Renders the prompt from a snapshot of the window, generates
    /// under a deadline with a single retry on transient failure, and
    /// appends the exchange only after success.
    pub async fn handle(
        &self,
        conversation: &str,
        text: &str,
    ) -> Result<String, GenerationError> {
        let prompt = self.window(conversation).render(&self.system_prompt, text);

        let mut retried = false;
        let reply = loop {
            match self.generate(&prompt).await {
                Ok(reply) => break reply,
                Err(e) if e.transient() && !retried => {
                    retried = true;
                    tracing::warn!("transient completion failure, retrying once: {e}");
                }
                Err(e) => return Err(e),
            }
        };

        self.windows
            .lock()
            .entry(conversation.to_owned())
            .or_insert_with(|| ConversationWindow::new(self.window_cap))
            .push_exchange(text, reply.clone());

        Ok(reply)
    }

    async fn generate(&self, prompt: &[Message]) -> Result<String, GenerationError> {
        let completion = self.provider.generate(&self.config, prompt, &self.sink);
        match tokio::time::timeout(GENERATION_TIMEOUT, completion).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(GENERATION_TIMEOUT)),
        }
    }
}
