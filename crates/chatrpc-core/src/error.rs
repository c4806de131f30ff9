//! Core domain errors.

use thiserror::Error;

/// Core domain errors for chatrpc.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Unknown procedure name.
    #[error("No such procedure: {0}")]
    UnknownProcedure(String),
}
