//! Webhook event model.
//!
//! The platform delivers a JSON payload holding zero or more events.
//! Event kinds form a closed set: anything this relay does not handle
//! deserializes to [`Event::Unknown`] and is dropped without error.

use serde::Deserialize;

/// Top-level webhook payload.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// The events carried by this delivery.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A webhook event, tagged by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// An inbound message.
    Message(MessageEvent),

    /// Any event kind the relay does not handle.
    #[serde(other)]
    Unknown,
}

/// An inbound message event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Single-use token for replying to this event.
    pub reply_token: String,

    /// Where the message came from.
    #[serde(default)]
    pub source: Source,

    /// The message content.
    pub message: MessageContent,
}

/// Message content, tagged by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    /// A plain text message.
    Text {
        /// The message text.
        text: String,
    },

    /// Stickers, images, and other content the relay ignores.
    #[serde(other)]
    Other,
}

/// The origin of an event.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The sending user, when known.
    #[serde(default)]
    pub user_id: Option<String>,

    /// The group chat the message was sent in, if any.
    #[serde(default)]
    pub group_id: Option<String>,

    /// The multi-person room the message was sent in, if any.
    #[serde(default)]
    pub room_id: Option<String>,
}

impl Source {
    /// The key identifying this conversation's context window.
    ///
    /// Group and room chats share one window per chat; direct chats
    /// get one window per user.
    pub fn conversation_id(&self) -> &str {
        self.group_id
            .as_deref()
            .or(self.room_id.as_deref())
            .or(self.user_id.as_deref())
            .unwrap_or("anonymous")
    }
}
