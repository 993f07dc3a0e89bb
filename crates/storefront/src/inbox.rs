//! Messaging panel store.

use chrono::{DateTime, Utc};
use tracing::debug;

use gourmet_core::MessageId;

use crate::models::Message;

/// Append-only list of messages, newest first.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    messages: Vec<Message>,
    version: u64,
}

impl Inbox {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            version: 0,
        }
    }

    /// Post a new unread message and return it.
    #[allow(clippy::indexing_slicing)] // the new record was just inserted at the front
    pub fn post(&mut self, content: impl Into<String>, sent_at: DateTime<Utc>) -> &Message {
        let message = Message {
            id: MessageId::sequential(self.messages.len()),
            sent_at,
            content: content.into(),
            read: false,
        };
        debug!(message_id = %message.id, "Posted message");
        self.messages.insert(0, message);
        self.version += 1;
        &self.messages[0]
    }

    /// Messages, newest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages still carrying the "new" badge.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|message| !message.read).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_prepends_with_sequential_ids() {
        let mut inbox = Inbox::new();
        inbox.post("first", Utc::now());
        inbox.post("second", Utc::now());

        let contents: Vec<&str> = inbox.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["second", "first"]);
        let ids: Vec<i32> = inbox.messages().iter().map(|m| m.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_messages_stay_unread() {
        let mut inbox = Inbox::new();
        inbox.post("hola", Utc::now());
        inbox.post("", Utc::now());
        assert_eq!(inbox.unread_count(), 2);
        assert!(inbox.messages().iter().all(|m| !m.read));
    }
}
