use super::*;

#[test]
fn backoff_doubles_up_to_the_cap() {
    let mut ms = INITIAL_BACKOFF_MS;
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(ms);
        ms = next_backoff_ms(ms);
    }
    assert_eq!(seen, [1_000, 2_000, 4_000, 8_000, 10_000, 10_000]);
}

#[test]
fn websocket_url_swaps_scheme_and_drops_api_prefix() {
    assert_eq!(
        websocket_url("http://127.0.0.1:8000/api", GLOBAL_CHAT_PATH, None),
        "ws://127.0.0.1:8000/ws/chat/"
    );
    assert_eq!(
        websocket_url("https://venti.example/api", "/ws/chat/5/", None),
        "wss://venti.example/ws/chat/5/"
    );
}

#[test]
fn websocket_url_appends_token_query_for_club_rooms() {
    assert_eq!(
        websocket_url("http://api.test/api", "/ws/chat/5/", Some("T1")),
        "ws://api.test/ws/chat/5/?token=T1"
    );
}

#[test]
fn inbound_frames_parse_the_broadcast_record() {
    let msg = parse_inbound(r#"{"message":"hi","sender":"ann","timestamp":"2024-05-01T10:00:00Z"}"#)
        .expect("canonical frame should parse");
    assert_eq!(msg.author, "ann");
    assert_eq!(msg.text, "hi");
    assert_eq!(msg.timestamp, "2024-05-01T10:00:00Z");
    assert_eq!(msg.id, None);
}

#[test]
fn inbound_frames_default_missing_sender_and_timestamp() {
    let msg = parse_inbound(r#"{"message":"hi"}"#).expect("message-only frame should parse");
    assert_eq!(msg.author, "Anonymous");
    assert_eq!(msg.timestamp, "");
}

#[test]
fn malformed_inbound_frames_are_rejected() {
    assert_eq!(parse_inbound("not json"), None);
    assert_eq!(parse_inbound(r#"{"sender":"ann"}"#), None);
    assert_eq!(parse_inbound(r#"{"message": 42}"#), None);
    assert_eq!(parse_inbound(r#"["hi"]"#), None);
}

#[test]
fn outbound_frames_wrap_the_text() {
    let frame: serde_json::Value = serde_json::from_str(&outbound_frame("hello")).unwrap();
    assert_eq!(frame, serde_json::json!({ "message": "hello" }));
}

#[test]
fn sends_are_gated_on_an_open_channel() {
    assert!(can_send(ChannelStatus::Open));
    assert!(!can_send(ChannelStatus::Connecting));
    assert!(!can_send(ChannelStatus::Closed));
}
