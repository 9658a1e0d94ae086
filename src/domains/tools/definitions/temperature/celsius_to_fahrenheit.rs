//! Celsius to Fahrenheit tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TemperatureTool;
use crate::domains::conversion::TemperatureScale;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the Celsius to Fahrenheit tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CelsiusToFahrenheitParams {
    /// Temperature in degrees Celsius to convert to Fahrenheit.
    pub celsius: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Converts a Celsius temperature to Fahrenheit.
pub struct CelsiusToFahrenheitTool;

impl TemperatureTool for CelsiusToFahrenheitTool {
    const NAME: &'static str = "celsius_to_fahrenheit";
    const DESCRIPTION: &'static str = "Convert Celsius to Fahrenheit.";
    const FROM: TemperatureScale = TemperatureScale::Celsius;
    const TO: TemperatureScale = TemperatureScale::Fahrenheit;

    type Params = CelsiusToFahrenheitParams;

    fn input(params: &Self::Params) -> f64 {
        params.celsius
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run(celsius: f64) -> serde_json::Value {
        let result = CelsiusToFahrenheitTool::execute(&CelsiusToFahrenheitParams { celsius });
        assert_eq!(result.is_error, Some(false));
        result.structured_content.expect("structured_content should exist")["result"].clone()
    }

    #[test]
    fn test_known_values() {
        assert_eq!(run(0.0), 32.0);
        assert_eq!(run(100.0), 212.0);
        assert_eq!(run(-40.0), -40.0);
    }

    #[test]
    fn test_overflow_is_reported_as_tool_error() {
        let result = CelsiusToFahrenheitTool::execute(&CelsiusToFahrenheitParams { celsius: f64::MAX });
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = CelsiusToFahrenheitTool::to_tool();
        assert_eq!(tool.name, "celsius_to_fahrenheit");
        assert_eq!(tool.description.as_deref(), Some("Convert Celsius to Fahrenheit."));

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["properties"]["celsius"]["type"], "number");
        assert_eq!(schema["required"], serde_json::json!(["celsius"]));
        assert!(
            schema["properties"]["celsius"]["description"]
                .as_str()
                .unwrap()
                .contains("Celsius")
        );

        let output = tool.output_schema.expect("output schema should be set");
        assert!(output["properties"].get("result").is_some());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let result =
            CelsiusToFahrenheitTool::http_handler(serde_json::json!({ "celsius": 100 })).unwrap();
        assert_eq!(result["structuredContent"]["result"], 212.0);
        assert_eq!(result["content"][0]["text"], "100 °C = 212 °F");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_rejects_non_numeric() {
        let result = CelsiusToFahrenheitTool::http_handler(serde_json::json!({ "celsius": "hot" }));
        assert!(matches!(result, Err(crate::domains::tools::ToolError::InvalidArguments(_))));

        let result = CelsiusToFahrenheitTool::http_handler(serde_json::json!({}));
        assert!(result.is_err());
    }
}
