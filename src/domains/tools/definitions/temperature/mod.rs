//! Temperature conversion tools.
//!
//! Both tools share the same shape: one required numeric parameter, one
//! numeric result. The `TemperatureTool` trait carries that shape so each
//! tool file only declares its name, scales and parameter struct.
//!
//! - `celsius_to_fahrenheit`: Celsius to Fahrenheit
//! - `fahrenheit_to_celsius`: Fahrenheit to Celsius
//!
//! Each tool has handlers for both HTTP and STDIO/TCP transports.

pub mod celsius_to_fahrenheit;
pub mod common;
pub mod fahrenheit_to_celsius;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domains::conversion::{TemperatureScale, convert};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

pub use celsius_to_fahrenheit::{CelsiusToFahrenheitParams, CelsiusToFahrenheitTool};
pub use common::ConversionOutput;
pub use fahrenheit_to_celsius::{FahrenheitToCelsiusParams, FahrenheitToCelsiusTool};

/// A tool converting a single temperature value between two scales.
pub trait TemperatureTool: Sized + Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Scale of the incoming value.
    const FROM: TemperatureScale;

    /// Scale of the returned value.
    const TO: TemperatureScale;

    /// Parameters accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Extract the temperature to convert.
    fn input(params: &Self::Params) -> f64;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    fn execute(params: &Self::Params) -> CallToolResult {
        let input = Self::input(params);
        info!(tool = Self::NAME, input, "Conversion tool called");

        let output = convert(input, Self::FROM, Self::TO);
        common::conversion_result(input, output, Self::FROM, Self::TO)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: Self::Params = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params);

        // Serialize the full CallToolResult to preserve structuredContent
        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ConversionOutput>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: Self::Params =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
