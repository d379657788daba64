//! Follow Up Boss MCP Server - Main entry point
//!
//! This is the main executable for the Follow Up Boss MCP Server, which provides
//! a Model Context Protocol (MCP) interface to the Follow Up Boss CRM API.

use anyhow::Result;
use followupboss_mcp_server::client::{AsyncFubClient, AsyncFubClientImpl};
use followupboss_mcp_server::{Config, Dispatcher, FubClient, FubMcpServer, ToolPolicy, ToolRegistry};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stderr only; stdout carries the MCP stream
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Follow Up Boss MCP Server with API URL: {}",
        config.fub_base_url
    );

    let registry = ToolRegistry::builtin();
    if let Err(e) = registry.validate() {
        error!("Tool catalog is invalid: {}", e);
        return Err(e.into());
    }

    let sync_client = FubClient::new(&config);
    let client = Arc::new(AsyncFubClientImpl::new(sync_client)) as Arc<dyn AsyncFubClient>;

    let policy = ToolPolicy::from_config(&config);
    let dispatcher = Dispatcher::new(registry, client, policy);
    let server = FubMcpServer::new(dispatcher);

    info!(
        "Follow Up Boss MCP Server initialized ({} tools advertised)",
        server.dispatcher().list_tools().len()
    );
    if policy.safe_mode {
        warn!("Safe mode enabled: delete tools are hidden and refused");
    }
    if policy.validate_arguments {
        info!("Local validation of required arguments enabled");
    }

    info!("Starting MCP server with stdio transport");
    followupboss_mcp_server::server::run_server(server).await?;

    info!("Follow Up Boss MCP Server shutdown complete");
    Ok(())
}
