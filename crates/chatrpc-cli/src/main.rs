//! chatrpc CLI - Command line client for the chat procedures.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chatrpc_client::{ClientError, RpcClient};
use chatrpc_core::ChatMessage;

/// chatrpc CLI - talk to a chatrpc server
#[derive(Parser)]
#[command(name = "chatrpc")]
#[command(about = "CLI for the chatrpc server", long_about = None)]
struct Cli {
    /// Server address
    #[arg(short, long, env = "CHATRPC_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the server greeting
    Greeting,

    /// List the most recent messages
    Messages {
        /// How many messages to show (server default when omitted)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Post a message
    Send {
        /// Display name
        #[arg(short, long)]
        user: String,

        /// Message text
        #[arg(short, long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = RpcClient::new(&cli.url);

    let result = match cli.command {
        Commands::Greeting => greeting(&client).await,
        Commands::Messages { limit } => messages(&client, limit).await,
        Commands::Send { user, message } => send(&client, &user, &message).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn greeting(client: &RpcClient) -> Result<(), ClientError> {
    let response = client.greeting().await?;
    println!("{}", response.message);
    Ok(())
}

async fn messages(client: &RpcClient, limit: Option<i64>) -> Result<(), ClientError> {
    let messages = client.get_messages(limit).await?;

    println!("Messages ({}):", messages.len());
    println!("{:<36}  {:<16}  {}", "ID", "USER", "MESSAGE");
    println!("{}", "-".repeat(80));

    for message in &messages {
        print_message(message);
    }

    Ok(())
}

async fn send(client: &RpcClient, user: &str, message: &str) -> Result<(), ClientError> {
    let response = client.add_message(user, message).await?;

    println!("Message sent:");
    println!("  User:       {}", response.user);
    println!("  Message:    {}", response.message);

    Ok(())
}

fn print_message(message: &ChatMessage) {
    println!(
        "{:<36}  {:<16}  {}",
        message.id,
        truncate(&message.user, 16),
        message.message
    );
}

/// Shorten `s` to at most `max` characters, marking the cut with `~`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}
