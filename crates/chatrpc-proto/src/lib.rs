//! RPC contract for chatrpc.
//!
//! This crate contains:
//! - The procedure catalogue (`greeting`, `getMessages`, `addMessage`)
//! - Typed request and response payloads
//! - Validation of raw JSON input into typed requests
//! - The tRPC-style response envelope shared by server and client

pub mod envelope;
pub mod procedure;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use envelope::{Envelope, ErrorEnvelope, RpcError, RpcErrorCode, SuccessEnvelope};
pub use procedure::{Procedure, ProcedureKind};
pub use types::{
    AddMessageInput, AddMessageResponse, GetMessagesInput, GreetingResponse,
    DEFAULT_MESSAGE_LIMIT, GREETING,
};
pub use validate::{validate_add_message, validate_get_messages, ValidationError, ValidationIssue};
