//! Conversion domain module.
//!
//! Pure, stateless temperature arithmetic. Nothing in here knows about MCP,
//! JSON or transports; the tools domain wraps these functions and exposes
//! them to clients.
//!
//! - `formulas.rs` - The two linear conversion formulas
//! - `scale.rs` - Temperature scale model and generic dispatch

mod formulas;
mod scale;

pub use formulas::{celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use scale::{TemperatureScale, convert};
