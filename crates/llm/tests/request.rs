//! Tests for the completion request body.

use pelican_llm::{GenerationConfig, Request};
use wcore::Message;

#[test]
fn defaults_match_relay_parameters() {
    let config = GenerationConfig::default();
    assert_eq!(config.model, "gpt-3.5-turbo");
    assert_eq!(config.tokens, 512);
    assert_eq!(config.temperature, 0.2);
}

#[test]
fn request_from_config() {
    let request = Request::from(&GenerationConfig::new("gpt-4o-mini"));
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.max_tokens, 512);
    assert!(!request.stream);
    assert!(request.messages.is_empty());
}

#[test]
fn stream_flag() {
    let request = Request::from(&GenerationConfig::default()).stream();
    assert!(request.stream);
}

#[test]
fn messages_replaces_prompt() {
    let prompt = vec![Message::system("persona"), Message::user("hi")];
    let request = Request::from(&GenerationConfig::default()).messages(&prompt);
    assert_eq!(request.messages, prompt);
}

#[test]
fn serializes_wire_format() {
    let request = Request::from(&GenerationConfig::default())
        .messages(&[Message::user("Hello")])
        .stream();
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["model"], "gpt-3.5-turbo");
    assert_eq!(json["max_tokens"], 512);
    assert_eq!(json["stream"], true);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "Hello");
}
