//! Webhook-driven relay between a messaging channel and a hosted
//! completion service.
//!
//! One inbound text message flows through a strictly sequential
//! pipeline: verify the webhook signature, render the prompt from the
//! conversation's bounded window, generate the reply, append the
//! exchange, send the reply through the platform's reply endpoint.

pub use {
    config::{ConfigError, RelayConfig},
    event::{Event, MessageContent, MessageEvent, Source, WebhookPayload},
    handler::ConversationHandler,
    reply::{LineReply, ReplySender},
    router::router,
    signature::SignatureError,
    state::AppState,
};

pub mod config;
pub mod event;
pub mod handler;
pub mod reply;
pub mod router;
pub mod signature;
pub mod state;
