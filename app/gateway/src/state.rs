//! Shared application state for the HTTP surface.

use crate::{handler::ConversationHandler, reply::ReplySender};
use llm::{Completion, TokenSink};
use std::sync::Arc;

/// State shared by all request handlers.
pub struct AppState<P: Completion, R: ReplySender, S: TokenSink> {
    /// The conversation handler.
    pub handler: Arc<ConversationHandler<P, S>>,
    /// The reply client.
    pub replies: R,
    /// HMAC key for webhook signature verification.
    pub channel_secret: String,
}

impl<P: Completion, R: ReplySender, S: TokenSink> Clone for AppState<P, R, S> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            replies: self.replies.clone(),
            channel_secret: self.channel_secret.clone(),
        }
    }
}
