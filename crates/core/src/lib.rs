//! Core types for the pelican webhook relay.

pub use {
    message::{Message, Role},
    window::{ConversationWindow, DEFAULT_EXCHANGES},
};

mod message;
mod window;
