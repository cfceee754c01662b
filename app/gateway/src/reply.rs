//! Reply delivery through the platform's reply endpoint.

use llm::reqwest::{
    Client, Method,
    header::{self, HeaderMap},
};
use serde::Serialize;

/// The LINE Messaging API reply endpoint.
pub const ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

/// Delivers generated text back through a reply token.
///
/// Reply tokens are single-use and short-lived; that is enforced by
/// the platform, not here.
pub trait ReplySender: Clone + Send + Sync {
    /// Send `text` as the reply for one webhook event.
    fn send(&self, reply_token: &str, text: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Reply client for the LINE Messaging API.
#[derive(Clone)]
pub struct LineReply {
    /// The HTTP client.
    client: Client,
    /// Request headers (authorization, content-type).
    headers: HeaderMap,
    /// Reply endpoint URL.
    endpoint: String,
}

impl LineReply {
    /// Create a reply client for the platform endpoint.
    pub fn new(client: Client, channel_access_token: &str) -> anyhow::Result<Self> {
        Self::custom(client, channel_access_token, ENDPOINT)
    }

    /// Create a reply client targeting a custom endpoint.
    pub fn custom(client: Client, token: &str, endpoint: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::AUTHORIZATION, format!("Bearer {token}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }
}

impl ReplySender for LineReply {
    async fn send(&self, reply_token: &str, text: &str) -> anyhow::Result<()> {
        let body = ReplyBody {
            reply_token,
            messages: vec![ReplyMessage { kind: "text", text }],
        };

        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("reply endpoint returned {status}: {body}");
        }
        Ok(())
    }
}

/// The reply request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyBody<'a> {
    reply_token: &'a str,
    messages: Vec<ReplyMessage<'a>>,
}

/// One outgoing text message.
#[derive(Serialize)]
struct ReplyMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}
