//! tRPC-style response envelope.
//!
//! Success: `{ "id": null, "result": { "type": "data", "data": ... } }`
//!
//! Error: `{ "id": null, "error": { "message", "code", "data": { "code",
//! "httpStatus", "path", "issues" } } }`

use chatrpc_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::procedure::{Procedure, ProcedureKind};
use crate::validate::{ValidationError, ValidationIssue};

/// Error classes a procedure call can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcErrorCode {
    /// Transport input was not valid JSON.
    ParseError,
    /// Input failed validation.
    BadRequest,
    /// No such procedure.
    NotFound,
    /// Query called as mutation or vice versa.
    MethodNotSupported,
    /// Anything else.
    InternalServerError,
}

impl RpcErrorCode {
    /// JSON-RPC 2.0 style numeric code.
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::BadRequest => -32600,
            Self::NotFound => -32004,
            Self::MethodNotSupported => -32005,
            Self::InternalServerError => -32603,
        }
    }

    /// HTTP status the error is served with.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ParseError | Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotSupported => 405,
            Self::InternalServerError => 500,
        }
    }
}

/// A failed procedure call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RpcError {
    pub code: RpcErrorCode,
    pub message: String,
    /// Procedure name, when the call got far enough to resolve one.
    pub path: Option<String>,
    pub issues: Vec<ValidationIssue>,
}

impl RpcError {
    /// Create an error with no path or issues.
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            issues: Vec::new(),
        }
    }

    /// Transport input could not be decoded as JSON.
    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::new(
            RpcErrorCode::ParseError,
            format!("Failed to parse input: {}", detail),
        )
    }

    /// Procedure served over the wrong HTTP method.
    pub fn method_not_supported(procedure: Procedure) -> Self {
        let expected = match procedure.kind() {
            ProcedureKind::Query => "GET",
            ProcedureKind::Mutation => "POST",
        };
        Self::new(
            RpcErrorCode::MethodNotSupported,
            format!(
                "'{}' is a {}; call it with {}",
                procedure,
                procedure.kind(),
                expected
            ),
        )
        .with_path(procedure.name())
    }

    /// Attach the procedure path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Wrap into the wire envelope.
    pub fn into_envelope(self) -> ErrorEnvelope {
        ErrorEnvelope {
            id: None,
            error: ErrorBody {
                message: self.message,
                code: self.code.json_rpc_code(),
                data: ErrorData {
                    code: self.code,
                    http_status: self.code.http_status(),
                    path: self.path,
                    issues: self.issues,
                },
            },
        }
    }
}

impl From<ValidationError> for RpcError {
    fn from(err: ValidationError) -> Self {
        Self {
            code: RpcErrorCode::BadRequest,
            message: err.to_string(),
            path: None,
            issues: err.issues,
        }
    }
}

impl From<CoreError> for RpcError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownProcedure(ref name) => {
                Self::new(RpcErrorCode::NotFound, err.to_string()).with_path(name.clone())
            }
        }
    }
}

impl From<ErrorEnvelope> for RpcError {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self {
            code: envelope.error.data.code,
            message: envelope.error.message,
            path: envelope.error.data.path,
            issues: envelope.error.data.issues,
        }
    }
}

/// Successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub id: Option<u64>,
    pub result: ResultBody<T>,
}

impl<T> SuccessEnvelope<T> {
    /// Wrap procedure output.
    pub fn new(data: T) -> Self {
        Self {
            id: None,
            result: ResultBody {
                kind: "data".to_string(),
                data,
            },
        }
    }
}

/// `result` member of a success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBody<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: T,
}

/// Error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub id: Option<u64>,
    pub error: ErrorBody,
}

/// `error` member of an error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: i32,
    pub data: ErrorData,
}

/// Structured error detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorData {
    pub code: RpcErrorCode,
    pub http_status: u16,
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

/// Either envelope, as seen by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(SuccessEnvelope<T>),
    Failure(ErrorEnvelope),
}

impl<T> Envelope<T> {
    /// Unwrap into the procedure output or the call's error.
    pub fn into_result(self) -> Result<T, RpcError> {
        match self {
            Self::Success(success) => Ok(success.result.data),
            Self::Failure(failure) => Err(failure.into()),
        }
    }
}
