//! Interactive console chat with the Scout agent.
//!
//! Reads user input line by line, routes each message through the
//! conversation orchestrator and prints the reply. The loop ends on
//! `exit` or `quit`. This path fills prompt templates locally and makes
//! no model calls.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scout::agent::ScoutAgent;
use scout::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout agent v{}", env!("CARGO_PKG_VERSION"));

    let mut agent = ScoutAgent::new();
    info!(session = %agent.session_id(), "conversation session opened");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(b"Welcome to the Scout agent demo. Type 'exit' to quit.\n")
        .await?;
    stdout.write_all(b"You: ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            stdout.write_all(b"You: ").await?;
            stdout.flush().await?;
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            stdout.write_all(b"Goodbye!\n").await?;
            stdout.flush().await?;
            return Ok(());
        }

        let response = agent.handle(input);
        stdout
            .write_all(format!("Scout: {response}\n\nYou: ").as_bytes())
            .await?;
        stdout.flush().await?;
    }

    stdout.write_all(b"\nExiting.\n").await?;
    stdout.flush().await?;
    Ok(())
}
