//! Append-only in-memory message store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ChatMessage;

/// Messages a freshly started server shows before anyone has posted.
pub const SEED_MESSAGES: [(&str, &str); 2] = [
    ("User1", "This is my the first message!"),
    ("User2", "Alright alright alright"),
];

/// Ordered, append-only sequence of chat messages.
///
/// All access goes through a single lock: `append` builds and pushes the
/// entry while holding the write lock, and `tail` clones its window under
/// the read lock, so readers never see a half-built entry.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: RwLock<Vec<ChatMessage>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with [`SEED_MESSAGES`].
    pub fn seeded() -> Self {
        let store = Self::new();
        for (user, message) in SEED_MESSAGES {
            store.append(user, message);
        }
        store
    }

    /// Append a new message and return it.
    pub fn append(&self, user: impl Into<String>, message: impl Into<String>) -> ChatMessage {
        let mut messages = self.write();
        let entry = ChatMessage::new(user, message);
        messages.push(entry.clone());
        entry
    }

    /// Return the last `n` messages, oldest first.
    ///
    /// `n <= 0` yields an empty list; `n` beyond the store size yields the
    /// whole history.
    pub fn tail(&self, n: i64) -> Vec<ChatMessage> {
        if n <= 0 {
            return Vec::new();
        }
        let messages = self.read();
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        let start = messages.len().saturating_sub(n);
        messages[start..].to_vec()
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The guarded Vec is valid after any panic mid-push, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ChatMessage>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ChatMessage>> {
        self.messages.write().unwrap_or_else(PoisonError::into_inner)
    }
}
