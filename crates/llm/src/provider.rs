//! The provider for the chat completions API.

use crate::{
    FinishReason, GenerationConfig, GenerationError, Request, Response, StreamChunk, TokenSink,
    stream,
};
use async_stream::try_stream;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap},
};
use wcore::Message;

/// OpenAI-compatible endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
    /// Ollama local chat completions.
    pub const OLLAMA: &str = "http://localhost:11434/v1/chat/completions";
}

/// The completion seam used by the conversation handler.
///
/// Uses RPITIT (no dyn dispatch); tests substitute a scripted provider.
pub trait Completion: Clone + Send + Sync {
    /// Generate the full completion for a rendered prompt, forwarding
    /// streamed tokens to the sink as they arrive.
    fn generate<S: TokenSink>(
        &self,
        config: &GenerationConfig,
        messages: &[Message],
        sink: &S,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// An OpenAI-compatible completion provider.
#[derive(Clone)]
pub struct OpenAi {
    /// The HTTP client.
    client: Client,
    /// Request headers (authorization, content-type).
    headers: HeaderMap,
    /// Chat completions endpoint URL.
    endpoint: String,
}

impl OpenAi {
    /// Create a provider targeting the OpenAI API.
    pub fn new(client: Client, key: &str) -> anyhow::Result<Self> {
        Self::custom(client, key, endpoint::OPENAI)
    }

    /// Create a provider targeting a custom OpenAI-compatible endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }

    /// Send a single blocking completion request.
    pub async fn send(
        &self,
        config: &GenerationConfig,
        messages: &[Message],
    ) -> Result<Response, GenerationError> {
        let body = Request::from(config).messages(messages);
        tracing::debug!("request: {}", serde_json::to_string(&body)?);

        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!("response: {text}");
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Send a completion request with streaming, yielding chunks as
    /// SSE frames arrive.
    pub fn stream(
        &self,
        config: &GenerationConfig,
        messages: &[Message],
    ) -> impl Stream<Item = Result<StreamChunk, GenerationError>> {
        let body = Request::from(config).messages(messages).stream();
        tracing::debug!(
            "request: {}",
            serde_json::to_string(&body).unwrap_or_default()
        );
        let request = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body);

        try_stream! {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                Err(GenerationError::Api {
                    status: status.as_u16(),
                    body,
                })?;
            } else {
                let mut frames = response.bytes_stream();
                while let Some(bytes) = frames.next().await {
                    let text = String::from_utf8_lossy(&bytes?).into_owned();
                    for chunk in stream::parse_frames(&text) {
                        yield chunk;
                    }
                }
            }
        }
    }
}

impl Completion for OpenAi {
    async fn generate<S: TokenSink>(
        &self,
        config: &GenerationConfig,
        messages: &[Message],
        sink: &S,
    ) -> Result<String, GenerationError> {
        let stream = self.stream(config, messages);
        futures_util::pin_mut!(stream);

        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if let Some(token) = chunk.content() {
                sink.token(token);
                text.push_str(token);
            }
            if let Some(reason) = chunk.reason() {
                if reason == FinishReason::Length {
                    tracing::warn!("completion truncated at the token budget");
                }
                break;
            }
        }

        Ok(text)
    }
}
