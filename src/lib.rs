//! Transit MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the Tongling public-transit query API as tools: station name
//! autocomplete, line information, live vehicle positions, departure
//! schedules, transfer planning, and service notices.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **transit**: Upstream HTTP client and the entities it returns
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Data resources that can be read by clients
//!   - **prompts**: Prompt templates for common transit queries
//!
//! # Example
//!
//! ```rust,no_run
//! use transit_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
