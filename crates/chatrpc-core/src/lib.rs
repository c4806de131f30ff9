//! chatrpc Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! The message store lives here so that both the server and the tests can
//! own fresh instances without going through a transport.

pub mod error;
pub mod ids;
pub mod message;
pub mod store;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::MessageId;
pub use message::ChatMessage;
pub use store::MessageStore;
