//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. It only offers tools; resources and prompts stay disabled.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`, HTTP dispatch goes
//! through the `ToolRegistry`. Adding a new tool does not touch this file.

use rmcp::{
    RoleServer, ServerHandler, ServiceExt, handler::server::tool::ToolRouter, model::*,
    tool_handler, transport::IntoTransport,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::transport::{TransportError, TransportResult};
use crate::domains::tools::{ToolRegistry, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// The main MCP server handler.
///
/// Cloning is cheap: the configuration is shared and the router only holds
/// stateless tool routes.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Instructions returned to clients on initialization.
    pub const INSTRUCTIONS: &'static str = "Converts temperatures between Celsius and Fahrenheit. \
         Call celsius_to_fahrenheit with a `celsius` number or fahrenheit_to_celsius \
         with a `fahrenheit` number.";

    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(),
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolRegistry::tool_names()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Serve the MCP protocol over an rmcp transport until the peer disconnects.
    ///
    /// Requests are dispatched through the `ToolRouter` by `#[tool_handler]`.
    pub async fn serve_transport<T, E, A>(self, transport: T) -> TransportResult<()>
    where
        T: IntoTransport<RoleServer, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = self
            .serve(transport)
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!(?reason, "MCP session finished");
        Ok(())
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        ToolRegistry::call_tool(name, arguments)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
