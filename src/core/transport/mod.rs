//! Transport layer for the MCP server.
//!
//! - **HTTP** (feature `http`, default): JSON-RPC over `POST`, served by axum
//! - **STDIO** (feature `stdio`): rmcp's stdin/stdout transport, for clients
//!   that spawn the server as a subprocess
//!
//! Both end up in the same tool definitions; see `McpServer`.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
