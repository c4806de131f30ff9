//! HTTP request and response types.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};

use chatrpc_proto::RpcError;

// ============================================================================
// Procedure call types
// ============================================================================

/// Query string of a procedure GET.
#[derive(Debug, Deserialize)]
pub struct RpcQuery {
    /// URL-encoded JSON input.
    pub input: Option<String>,
}

/// A failed procedure call, rendered as an error envelope.
#[derive(Debug)]
pub struct RpcFailure(pub RpcError);

impl From<RpcError> for RpcFailure {
    fn from(err: RpcError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RpcFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.into_envelope())).into_response()
    }
}

// ============================================================================
// Health types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current number of stored messages.
    pub messages: usize,
}
