//! chatrpc Server Library
//!
//! This crate provides the HTTP side of chatrpc: configuration, shared
//! state, the procedure service, and the axum router that exposes it.

pub mod config;
pub mod http;
pub mod metrics;
pub mod service;
pub mod state;

pub use config::Config;
pub use service::ChatService;
pub use state::AppState;
