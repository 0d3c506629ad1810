//! Kubernetes runbooks server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use runbooks_client::RunbookScraper;
use runbooks_core::{AppConfig, RunbookCache};
use tracing_subscriber::EnvFilter;

mod handler;
mod prompts;
mod resources;
#[cfg(test)]
mod testing;
mod tools;
mod uri;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    tracing::info!(index_url = %config.index_url, timeout_ms = config.timeout_ms, "Starting runbooks server on stdio transport");

    let scraper = RunbookScraper::new(&config)?;
    let cache = Arc::new(RunbookCache::new(scraper));

    let handler = handler::RunbooksServer::new(cache);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;
    tracing::info!("runbooks server stopped");

    Ok(())
}
