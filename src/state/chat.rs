//! Chat panel state: one ordered, append-only message list per view.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::MessageRecord;

/// A chat message normalized from either a live frame or a history record.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Database id for persisted history rows; live frames carry none.
    pub id: Option<i64>,
    pub author: String,
    pub text: String,
    pub timestamp: String,
}

impl From<MessageRecord> for ChatMessage {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: Some(record.id),
            author: record.author_username,
            text: record.text,
            timestamp: record.created_at,
        }
    }
}

/// Message list for one chat surface. Messages stay in arrival order; no
/// reordering and no dedup by id.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Replace the list with persisted history, oldest first as returned.
    pub fn seed_history(&mut self, records: Vec<MessageRecord>) {
        self.messages = records.into_iter().map(ChatMessage::from).collect();
    }

    /// Append a live message at the end.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}
