//! Domains module containing business logic organized by bounded contexts.
//!
//! - **conversion**: pure temperature arithmetic
//! - **tools**: MCP tools exposing the conversions to clients

pub mod conversion;
pub mod tools;
