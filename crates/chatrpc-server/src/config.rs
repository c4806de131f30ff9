//! Server configuration.

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "chatrpc=info,tower_http=info";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address.
    pub bind_addr: String,

    /// Start with the two demo messages in the store.
    pub seed_messages: bool,
}

impl Config {
    /// Build a config listening on `host:port`.
    pub fn new(host: &str, port: u16, seed_messages: bool) -> Self {
        Self {
            bind_addr: format!("{}:{}", host, port),
            seed_messages,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_PORT, true)
    }
}
