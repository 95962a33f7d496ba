//! SMA provisioner - entry point.
//!
//! Reads one lifecycle event as JSON from stdin, runs the matching
//! procedure, and writes the response JSON to stdout. A non-zero exit
//! tells the invoking orchestrator the lifecycle operation failed.

use anyhow::{Context, Result};
use chime_client::ChimeClient;
use sma_provisioner::config::Config;
use sma_provisioner::event::LifecycleEvent;
use sma_provisioner::handler::LifecycleHandler;
use stack_outputs::StackOutputsClient;
use tokio::io::{stdin, stdout, AsyncReadExt, AsyncWriteExt};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.handler.log_level);

    // Initialize clients
    let chime = ChimeClient::new(
        &config.chime.api_key,
        &config.chime.base_url,
        config.chime.timeout,
    )
    .context("Failed to create provisioning client")?;

    let stacks = StackOutputsClient::new(
        &config.stacks.api_key,
        &config.stacks.base_url,
        config.stacks.timeout,
    )
    .context("Failed to create stack-outputs client")?;

    let handler = LifecycleHandler::new(chime, stacks);

    // Read the lifecycle event
    let mut raw = String::new();
    stdin()
        .read_to_string(&mut raw)
        .await
        .context("Failed to read event from stdin")?;
    let event: LifecycleEvent =
        serde_json::from_str(&raw).context("Failed to parse lifecycle event")?;

    info!("Handling {} event", event.request_type);
    let response = handler.handle(event).await?;

    let mut out = stdout();
    out.write_all(serde_json::to_string(&response)?.as_bytes())
        .await?;
    out.write_all(b"\n").await?;
    out.flush().await?;

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // The response goes to stdout; keep logs on stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
