//! Helpers used by the registry and the HTTP layer.
//!
//! - [`code_generator`] - Short code generation
//! - [`validity`] - Parsing of the caller-supplied validity window

pub mod code_generator;
pub mod validity;
