//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{CelsiusToFahrenheitTool, FahrenheitToCelsiusTool, TemperatureTool};

/// Tool registry - the single list of tools the server offers.
///
/// Tools carry no state, so the registry is a namespace rather than a value.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![CelsiusToFahrenheitTool::NAME, FahrenheitToCelsiusTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CelsiusToFahrenheitTool::to_tool(),
            FahrenheitToCelsiusTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            CelsiusToFahrenheitTool::NAME => CelsiusToFahrenheitTool::http_handler(arguments),
            FahrenheitToCelsiusTool::NAME => FahrenheitToCelsiusTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
