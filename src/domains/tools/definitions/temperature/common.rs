//! Common utilities shared across the temperature tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domains::conversion::TemperatureScale;
use crate::domains::tools::ToolError;

/// Structured output of a conversion tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConversionOutput {
    /// The converted temperature.
    pub result: f64,
}

/// Human-readable summary, e.g. `100 °C = 212 °F`.
pub fn summary(input: f64, output: f64, from: TemperatureScale, to: TemperatureScale) -> String {
    format!(
        "{} {} = {} {}",
        format_value(input),
        from.symbol(),
        format_value(output),
        to.symbol()
    )
}

/// Shortest decimal form for everyday magnitudes, scientific notation
/// outside `[1e-6, 1e15)` so huge or tiny values stay short.
fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e15 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Build the tool result for a finished conversion.
///
/// JSON has no encoding for NaN or infinity, so a non-finite output is
/// reported as a tool error instead of being serialized as `null`.
pub fn conversion_result(
    input: f64,
    output: f64,
    from: TemperatureScale,
    to: TemperatureScale,
) -> CallToolResult {
    if !output.is_finite() {
        return error_result(&ToolError::non_finite_result(input).to_string());
    }

    let structured = ConversionOutput { result: output };

    CallToolResult {
        content: vec![Content::text(summary(input, output, from, to))],
        structured_content: serde_json::to_value(&structured).ok(),
        is_error: Some(false),
        meta: None,
    }
}
