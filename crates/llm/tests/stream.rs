//! Tests for SSE frame parsing and error classification.

use pelican_llm::{FinishReason, GenerationError, parse_frames};
use std::time::Duration;

#[test]
fn parses_content_frames() {
    let payload = concat!(
        r#"data: {"choices":[{"delta":{"content":"Hel"}}]}"#,
        "\n\n",
        r#"data: {"choices":[{"delta":{"content":"lo"}}]}"#,
        "\n\n",
    );
    let chunks = parse_frames(payload);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].content(), Some("Hel"));
    assert_eq!(chunks[1].content(), Some("lo"));
}

#[test]
fn skips_done_marker() {
    let payload = concat!(
        r#"data: {"choices":[{"delta":{},"finish_reason":"stop"}]}"#,
        "\n\ndata: [DONE]\n\n",
    );
    let chunks = parse_frames(payload);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].reason(), Some(FinishReason::Stop));
    assert_eq!(chunks[0].content(), None);
}

#[test]
fn skips_garbage_frames() {
    let payload = "data: not json\n\ndata: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n\n";
    let chunks = parse_frames(payload);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content(), Some("ok"));
}

#[test]
fn empty_payload_yields_nothing() {
    assert!(parse_frames("").is_empty());
    assert!(parse_frames("data: [DONE]\n\n").is_empty());
}

#[test]
fn unknown_finish_reason_parses_as_other() {
    let payload = r#"data: {"choices":[{"delta":{},"finish_reason":"tool_calls"}]}"#;
    let chunks = parse_frames(payload);
    assert_eq!(chunks[0].reason(), Some(FinishReason::Other));
}

#[test]
fn parses_blocking_response_body() {
    let response: pelican_llm::Response = serde_json::from_str(
        r#"{
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hi there"},
                "finish_reason": "stop"
            }]
        }"#,
    )
    .unwrap();
    assert_eq!(response.content(), Some("hi there"));
    assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
}

#[test]
fn timeout_is_transient() {
    assert!(GenerationError::Timeout(Duration::from_secs(30)).transient());
}

#[test]
fn api_error_is_not_transient() {
    let err = GenerationError::Api {
        status: 429,
        body: "quota exceeded".into(),
    };
    assert!(!err.transient());
    assert_eq!(
        err.to_string(),
        "completion endpoint returned 429: quota exceeded"
    );
}

#[test]
fn malformed_is_not_transient() {
    let parse_err = serde_json::from_str::<pelican_llm::StreamChunk>("{").unwrap_err();
    assert!(!GenerationError::from(parse_err).transient());
}
