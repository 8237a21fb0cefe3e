//! Serve command — MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use crate::server::ProductServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; transport is always stdio
}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let service = ProductServer::new(max_input_bytes)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;

    service.waiting().await.context("MCP server terminated")?;

    info!("MCP server stopped");
    Ok(())
}
