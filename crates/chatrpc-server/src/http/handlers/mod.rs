//! HTTP request handlers.

mod health;
mod rpc;

pub use health::{health_check, metrics_handler, root};
pub use rpc::{rpc_mutation, rpc_query};
