//! Chat message entity.

use serde::{Deserialize, Serialize};

use crate::MessageId;

/// A single message in the chat history.
///
/// Messages are immutable once created; the store only ever hands out
/// clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier, assigned at creation.
    pub id: MessageId,

    /// Display name of the author.
    pub user: String,

    /// Message text.
    pub message: String,
}

impl ChatMessage {
    /// Create a new message with a freshly generated id.
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            user: user.into(),
            message: message.into(),
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id() {
        let msg = ChatMessage::new("A", "hi");
        assert!(!msg.id.as_str().is_empty());
        assert_eq!(msg.user, "A");
        assert_eq!(msg.message, "hi");
    }

    #[test]
    fn test_wire_shape() {
        let msg = ChatMessage::new("A", "hi").with_id(MessageId::new("id-1"));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "id-1", "user": "A", "message": "hi" })
        );
    }
}
