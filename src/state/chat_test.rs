use super::*;

fn live(text: &str) -> ChatMessage {
    ChatMessage {
        id: None,
        author: "ann".to_owned(),
        text: text.to_owned(),
        timestamp: String::new(),
    }
}

#[test]
fn messages_append_in_arrival_order() {
    let mut state = ChatState::default();
    state.push(live("A"));
    state.push(live("B"));
    state.push(live("C"));
    let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["A", "B", "C"]);
}

#[test]
fn duplicate_messages_are_kept() {
    let mut state = ChatState::default();
    state.push(live("A"));
    state.push(live("A"));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn seed_history_replaces_list_and_keeps_server_order() {
    let mut state = ChatState::default();
    state.push(live("stale"));

    let record = |id: i64, text: &str| MessageRecord {
        id,
        club: 3,
        author_username: "bob".to_owned(),
        text: text.to_owned(),
        created_at: "2024-05-01T10:00:00Z".to_owned(),
    };
    state.seed_history(vec![record(1, "first"), record(2, "second")]);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].id, Some(1));
    assert_eq!(state.messages[0].text, "first");
    assert_eq!(state.messages[1].text, "second");
}

#[test]
fn history_records_normalize_author_and_timestamp() {
    let msg: ChatMessage = MessageRecord {
        id: 9,
        club: 1,
        author_username: "carol".to_owned(),
        text: "hi".to_owned(),
        created_at: "2024-05-01T10:00:00Z".to_owned(),
    }
    .into();
    assert_eq!(msg.author, "carol");
    assert_eq!(msg.timestamp, "2024-05-01T10:00:00Z");
}
