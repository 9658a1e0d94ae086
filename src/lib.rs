//! Temperature Conversion MCP Server
//!
//! This crate exposes Celsius/Fahrenheit conversions as Model Context
//! Protocol (MCP) tools, served over HTTP by default.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **conversion**: Pure temperature arithmetic
//!   - **tools**: MCP tools wrapping the conversions
//!
//! # Example
//!
//! ```rust,no_run
//! use temp_conversion_mcp_server::core::{Config, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     TransportService::launch(Config::from_env()).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::conversion::{celsius_to_fahrenheit, fahrenheit_to_celsius};
