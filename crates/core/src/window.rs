//! Bounded sliding window of conversation exchanges.
//!
//! The window retains the last N user+assistant exchanges for one
//! conversation. The system turn is never stored; it is prepended
//! when the prompt is rendered.

use crate::Message;

/// Default number of retained exchanges.
pub const DEFAULT_EXCHANGES: usize = 3;

/// An ordered sequence of past turns, capped at a fixed number of
/// user+assistant exchanges. Whole exchanges are evicted oldest-first
/// once the cap is exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationWindow {
    cap: usize,
    turns: Vec<Message>,
}

impl ConversationWindow {
    /// Create an empty window retaining up to `cap` exchanges.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            turns: Vec::new(),
        }
    }

    /// The retained turns, oldest first.
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// The number of retained exchanges.
    pub fn exchanges(&self) -> usize {
        self.turns.len() / 2
    }

    /// The exchange cap.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Whether the window holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append one completed exchange, evicting the oldest exchange(s)
    /// past the cap.
    pub fn push_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.turns.push(Message::user(user));
        self.turns.push(Message::assistant(assistant));
        while self.exchanges() > self.cap {
            self.turns.drain(..2);
        }
    }

    /// Render the full prompt for a new input: the system turn first,
    /// the window turns in insertion order, then the new user turn.
    ///
    /// Built fresh on every call; the window itself is not mutated.
    pub fn render(&self, system: &str, input: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.turns.len() + 2);
        messages.push(Message::system(system));
        messages.extend(self.turns.iter().cloned());
        messages.push(Message::user(input));
        messages
    }
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_EXCHANGES)
    }
}
