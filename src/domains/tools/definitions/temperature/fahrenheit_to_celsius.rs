//! Fahrenheit to Celsius tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TemperatureTool;
use crate::domains::conversion::TemperatureScale;

/// Parameters for the Fahrenheit to Celsius tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FahrenheitToCelsiusParams {
    /// Temperature in degrees Fahrenheit to convert to Celsius.
    pub fahrenheit: f64,
}

/// Converts a Fahrenheit temperature to Celsius.
pub struct FahrenheitToCelsiusTool;

impl TemperatureTool for FahrenheitToCelsiusTool {
    const NAME: &'static str = "fahrenheit_to_celsius";
    const DESCRIPTION: &'static str = "Convert Fahrenheit to Celsius.";
    const FROM: TemperatureScale = TemperatureScale::Fahrenheit;
    const TO: TemperatureScale = TemperatureScale::Celsius;

    type Params = FahrenheitToCelsiusParams;

    fn input(params: &Self::Params) -> f64 {
        params.fahrenheit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        for (fahrenheit, expected) in [(32.0, 0.0), (212.0, 100.0), (-40.0, -40.0)] {
            let result = FahrenheitToCelsiusTool::execute(&FahrenheitToCelsiusParams { fahrenheit });
            let structured = result.structured_content.expect("structured_content should exist");
            assert_eq!(structured["result"], expected);
        }
    }

    #[test]
    fn test_text_summary() {
        let result = FahrenheitToCelsiusTool::execute(&FahrenheitToCelsiusParams { fahrenheit: 212.0 });
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "212 °F = 100 °C");
    }

    #[test]
    fn test_input_schema() {
        let tool = FahrenheitToCelsiusTool::to_tool();
        assert_eq!(tool.name, "fahrenheit_to_celsius");

        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 1);
        assert!(properties.contains_key("fahrenheit"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_accepts_floats() {
        let result =
            FahrenheitToCelsiusTool::http_handler(serde_json::json!({ "fahrenheit": -40.0 })).unwrap();
        assert_eq!(result["structuredContent"]["result"], -40.0);
        assert_eq!(result["isError"], false);
    }
}
