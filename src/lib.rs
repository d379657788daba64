//! Follow Up Boss MCP Server - a Model Context Protocol server for the Follow Up Boss CRM.
//!
//! The server publishes a fixed catalog of CRM tools and translates each tool
//! call into exactly one REST request against the Follow Up Boss API.
//!
//! # Architecture
//!
//! - **registry**: Static tool catalog; each tool's schema paired with its route
//! - **dispatch**: Argument partitioning, call policy and response shaping
//! - **client**: HTTP client for the Follow Up Boss API
//! - **server**: MCP protocol boundary over stdio
//! - **models**: Outbound request and normalized call result types
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Request and tool-call counters

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod models;
pub mod registry;
pub mod server;

pub use client::FubClient;
pub use config::Config;
pub use dispatch::{Dispatcher, ToolPolicy};
pub use error::{ConfigError, DispatchError, FubApiError, RegistryError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ApiRequest, CallResult, HttpMethod, JsonObject, ToolFailure};
pub use registry::{ToolDescriptor, ToolEntry, ToolRegistry};
pub use server::FubMcpServer;
