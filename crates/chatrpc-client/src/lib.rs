//! Client library for chatrpc.
//!
//! Provides a typed client for the `/trpc` procedures plus the raw HTTP
//! helper it is built on.

pub mod error;
pub mod http;
pub mod rpc;

pub use error::ClientError;
pub use http::HttpClient;
pub use rpc::{decode_envelope, RpcClient};
