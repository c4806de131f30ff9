//! chatrpc Server

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatrpc_server::config::{DEFAULT_LOG_FILTER, DEFAULT_PORT};
use chatrpc_server::{http, AppState, Config};

/// chatrpc HTTP server.
#[derive(Parser, Debug)]
#[command(name = "chatrpc-server", about = "Chat message RPC server")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Start with an empty message history
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    let config = Config::new(&args.host, args.port, !args.no_seed);
    let state = AppState::from_config(&config);

    info!(
        bind_addr = %config.bind_addr,
        seeded_messages = state.message_count(),
        "Starting chatrpc server"
    );

    let router = http::create_router(state);
    let listener = TcpListener::bind(&config.bind_addr).await?;

    info!("api-server listening at http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chatrpc server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
