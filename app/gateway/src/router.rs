//! HTTP surface -- diagnostic routes and the webhook callback.

use crate::{
    AppState,
    event::{Event, MessageContent, WebhookPayload},
    reply::ReplySender,
    signature,
};
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use llm::{Completion, TokenSink};

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Build the axum router over the shared state.
pub fn router<P, R, S>(state: AppState<P, R, S>) -> Router
where
    P: Completion + 'static,
    R: ReplySender + 'static,
    S: TokenSink + 'static,
{
    Router::new()
        .route("/", get(root_get).post(root_post))
        .route("/callback", post(callback::<P, R, S>))
        .with_state(state)
}

/// Diagnostic route: logs whatever was sent.
async fn root_get(headers: HeaderMap, body: String) -> &'static str {
    tracing::info!("GET / headers: {headers:?}");
    tracing::info!("GET / body: {body}");
    "It Works as Get!"
}

/// Diagnostic route: logs whatever was sent.
async fn root_post(headers: HeaderMap, body: String) -> &'static str {
    tracing::info!("POST / headers: {headers:?}");
    tracing::info!("POST / body: {body}");
    "It Works as Post!"
}

/// Webhook entry point.
///
/// Rejects unsigned or mis-signed deliveries with 400 before touching
/// any state; a generation or reply failure aborts the cycle with 500
/// and no reply is sent.
async fn callback<P, R, S>(
    State(state): State<AppState<P, R, S>>,
    headers: HeaderMap,
    body: String,
) -> Result<&'static str, StatusCode>
where
    P: Completion + 'static,
    R: ReplySender + 'static,
    S: TokenSink + 'static,
{
    let Some(sig) = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        tracing::warn!("webhook delivery without signature header");
        return Err(StatusCode::BAD_REQUEST);
    };

    if let Err(e) = signature::verify(&state.channel_secret, body.as_bytes(), sig) {
        tracing::warn!("rejected webhook delivery: {e}");
        return Err(StatusCode::BAD_REQUEST);
    }

    tracing::info!("request body: {body}");
    let payload: WebhookPayload = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("malformed webhook payload: {e}");
        StatusCode::BAD_REQUEST
    })?;

    for event in payload.events {
        dispatch(&state, event).await.map_err(|e| {
            tracing::error!("event handling failed: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    }

    Ok("OK")
}

/// Route one event by kind; everything but a text message is a no-op.
async fn dispatch<P, R, S>(state: &AppState<P, R, S>, event: Event) -> anyhow::Result<()>
where
    P: Completion + 'static,
    R: ReplySender + 'static,
    S: TokenSink + 'static,
{
    match event {
        Event::Message(event) => {
            let MessageContent::Text { text } = event.message else {
                return Ok(());
            };
            let conversation = event.source.conversation_id();
            let reply = state.handler.handle(conversation, &text).await?;
            state.replies.send(&event.reply_token, &reply).await?;
        }
        Event::Unknown => {}
    }
    Ok(())
}
