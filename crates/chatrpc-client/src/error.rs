//! Error types for the client.

use chatrpc_proto::{RpcError, RpcErrorCode, ValidationIssue};
use thiserror::Error;

/// Errors that can occur when using the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to establish connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error envelope.
    #[error("{}: {message}", .path.as_deref().unwrap_or("rpc"))]
    Rpc {
        code: RpcErrorCode,
        message: String,
        path: Option<String>,
        /// Field-level detail for validation failures.
        issues: Vec<ValidationIssue>,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<RpcError> for ClientError {
    fn from(err: RpcError) -> Self {
        Self::Rpc {
            code: err.code,
            message: err.message,
            path: err.path,
            issues: err.issues,
        }
    }
}
