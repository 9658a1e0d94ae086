//! Celsius/Fahrenheit conversion formulas.
//!
//! Both functions are plain floating-point arithmetic with no rounding.
//! Non-finite inputs are not rejected: NaN stays NaN and infinities stay
//! infinite, following IEEE 754 semantics.

/// Offset between the freezing point of water in Fahrenheit and Celsius.
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert a temperature in degrees Celsius to degrees Fahrenheit.
///
/// Computes `celsius * 9/5 + 32`.
///
/// ```
/// use temp_conversion_mcp_server::domains::conversion::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
/// ```
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

/// Convert a temperature in degrees Fahrenheit to degrees Celsius.
///
/// Computes `(fahrenheit - 32) * 5/9`.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}
