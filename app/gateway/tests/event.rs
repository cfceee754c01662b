//! Webhook payload parsing tests.

use pelican_gateway::{Event, MessageContent, Source, WebhookPayload};

#[test]
fn parses_text_message_event() {
    let payload: WebhookPayload = serde_json::from_str(
        r#"{
            "destination": "Uxxx",
            "events": [{
                "type": "message",
                "replyToken": "tok-1",
                "source": {"type": "user", "userId": "U1"},
                "message": {"type": "text", "id": "1001", "text": "Hello"}
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(payload.events.len(), 1);
    let Event::Message(event) = &payload.events[0] else {
        panic!("expected a message event");
    };
    assert_eq!(event.reply_token, "tok-1");
    assert_eq!(event.source.conversation_id(), "U1");
    assert!(matches!(&event.message, MessageContent::Text { text } if text == "Hello"));
}

#[test]
fn non_text_message_is_other() {
    let payload: WebhookPayload = serde_json::from_str(
        r#"{"events": [{
            "type": "message",
            "replyToken": "tok-2",
            "source": {"type": "user", "userId": "U1"},
            "message": {"type": "sticker", "id": "1002", "stickerId": "5"}
        }]}"#,
    )
    .unwrap();

    let Event::Message(event) = &payload.events[0] else {
        panic!("expected a message event");
    };
    assert!(matches!(event.message, MessageContent::Other));
}

#[test]
fn unhandled_event_kind_is_unknown() {
    let payload: WebhookPayload = serde_json::from_str(
        r#"{"events": [
            {"type": "follow", "replyToken": "tok-3", "source": {"type": "user", "userId": "U1"}},
            {"type": "unsend", "source": {"type": "user", "userId": "U1"}}
        ]}"#,
    )
    .unwrap();

    assert_eq!(payload.events.len(), 2);
    assert!(matches!(payload.events[0], Event::Unknown));
    assert!(matches!(payload.events[1], Event::Unknown));
}

#[test]
fn empty_delivery() {
    let payload: WebhookPayload = serde_json::from_str(r#"{"events": []}"#).unwrap();
    assert!(payload.events.is_empty());

    let payload: WebhookPayload = serde_json::from_str("{}").unwrap();
    assert!(payload.events.is_empty());
}

#[test]
fn conversation_id_prefers_chat_over_user() {
    let group: Source = serde_json::from_str(
        r#"{"type": "group", "groupId": "G1", "userId": "U1"}"#,
    )
    .unwrap();
    assert_eq!(group.conversation_id(), "G1");

    let room: Source = serde_json::from_str(r#"{"type": "room", "roomId": "R1", "userId": "U1"}"#)
        .unwrap();
    assert_eq!(room.conversation_id(), "R1");

    let unknown = Source::default();
    assert_eq!(unknown.conversation_id(), "anonymous");
}
