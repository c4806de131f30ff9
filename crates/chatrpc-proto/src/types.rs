//! Typed request and response payloads.

use serde::{Deserialize, Serialize};

/// Text returned by `greeting` and `hello`.
pub const GREETING: &str = "Greetings from /trpc/hello :)";

/// Number of messages `getMessages` returns when no limit is given.
pub const DEFAULT_MESSAGE_LIMIT: i64 = 10;

/// Response for `greeting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}

/// Validated input for `getMessages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMessagesInput {
    /// How many trailing messages to return. Zero or negative means none.
    pub limit: i64,
}

impl Default for GetMessagesInput {
    fn default() -> Self {
        Self {
            limit: DEFAULT_MESSAGE_LIMIT,
        }
    }
}

/// Validated input for `addMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMessageInput {
    pub user: String,
    pub message: String,
}

/// Response for `addMessage`: the accepted payload, echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMessageResponse {
    pub user: String,
    pub message: String,
}

impl From<AddMessageInput> for AddMessageResponse {
    fn from(input: AddMessageInput) -> Self {
        Self {
            user: input.user,
            message: input.message,
        }
    }
}
