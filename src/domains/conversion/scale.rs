//! Temperature scales.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::formulas::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// The unit a temperature value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

impl TemperatureScale {
    /// Unit symbol used in human-readable output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Lowercase name of the scale.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `value` from one scale to another.
///
/// Converting to the same scale returns the value untouched.
pub fn convert(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    match (from, to) {
        (TemperatureScale::Celsius, TemperatureScale::Fahrenheit) => celsius_to_fahrenheit(value),
        (TemperatureScale::Fahrenheit, TemperatureScale::Celsius) => fahrenheit_to_celsius(value),
        _ => value,
    }
}
