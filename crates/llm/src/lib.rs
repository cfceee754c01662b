//! OpenAI-compatible chat completion client.
//!
//! The relay talks to a hosted completion endpoint over the OpenAI
//! chat completions wire format: a blocking [`OpenAi::send`] for
//! single-shot requests, and a streaming path that forwards tokens to
//! a [`TokenSink`] while still returning the full text as one unit.

pub use reqwest;
pub use {
    config::GenerationConfig,
    error::GenerationError,
    provider::{Completion, OpenAi, endpoint},
    request::Request,
    response::Response,
    sink::{LogSink, NullSink, TokenSink},
    stream::{FinishReason, StreamChunk, parse_frames},
};

mod config;
mod error;
mod provider;
mod request;
mod response;
mod sink;
mod stream;
