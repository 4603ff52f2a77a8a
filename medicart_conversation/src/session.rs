//! Chat transcript.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use medicart_core::{ChatMessage, Responder, Role};

/// A chat with the doctor, oldest message first.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// A session opened by the doctor's greeting.
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self::empty();
        session.add_message(Role::Doctor, Responder::greeting().to_string());
        session
    }

    /// A session with no messages at all.
    #[must_use]
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_message(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage::new(role, content));
        self.updated_at = Utc::now();
    }

    #[must_use]
    pub fn last_n_messages(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    #[must_use]
    pub fn user_messages(&self) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User)
            .collect()
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.updated_at = Utc::now();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_opens_with_greeting() {
        let session = ChatSession::new();

        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages[0].role, Role::Doctor);
        assert_eq!(session.messages[0].content, Responder::greeting());
        assert!(session.user_messages().is_empty());
    }

    #[test]
    fn test_chat_session() {
        let mut session = ChatSession::empty();
        assert!(session.is_empty());

        session.add_message(Role::User, "Hello".to_string());
        session.add_message(Role::Doctor, "Hi there!".to_string());

        assert_eq!(session.message_count(), 2);
        let last = session.last_n_messages(1);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].content, "Hi there!");
        assert_eq!(session.user_messages().len(), 1);

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_last_n_messages() {
        let mut session = ChatSession::empty();

        for i in 0..10 {
            session.add_message(Role::User, format!("Message {i}"));
        }

        assert_eq!(session.last_n_messages(3).len(), 3);
        assert_eq!(session.last_n_messages(100).len(), 10);
        assert_eq!(session.last_n_messages(0).len(), 0);
    }
}
