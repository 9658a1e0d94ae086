//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod temperature;

pub use temperature::{
    CelsiusToFahrenheitParams, CelsiusToFahrenheitTool, ConversionOutput,
    FahrenheitToCelsiusParams, FahrenheitToCelsiusTool, TemperatureTool,
};
