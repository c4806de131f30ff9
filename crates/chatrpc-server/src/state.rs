//! Shared application state.

use std::sync::Arc;

use chatrpc_core::MessageStore;

use crate::config::Config;
use crate::metrics::RequestMetrics;

/// Shared application state.
pub struct AppState {
    /// The message history. Owned here; handlers only borrow it.
    pub store: MessageStore,

    /// Per-procedure call counters.
    pub metrics: RequestMetrics,
}

impl AppState {
    /// Create a new AppState with an empty store, wrapped in Arc.
    pub fn new() -> Arc<Self> {
        Self::with_store(MessageStore::new())
    }

    /// Create a new AppState around an existing store.
    pub fn with_store(store: MessageStore) -> Arc<Self> {
        Arc::new(Self {
            store,
            metrics: RequestMetrics::default(),
        })
    }

    /// Create the state a server started with `config` should have.
    pub fn from_config(config: &Config) -> Arc<Self> {
        if config.seed_messages {
            Self::with_store(MessageStore::seeded())
        } else {
            Self::new()
        }
    }

    /// Get the number of stored messages.
    pub fn message_count(&self) -> usize {
        self.store.len()
    }
}
