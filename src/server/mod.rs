//! MCP server implementation for Follow Up Boss.
//!
//! This module exposes the tool catalog to AI assistants over the Model
//! Context Protocol.

pub mod handlers;

pub use handlers::FubMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport until the client disconnects.
pub async fn run_server(server: FubMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
