//! Data Transfer Objects for API requests and responses.
//!
//! Requests are decoded with Serde from form bodies or query strings;
//! responses are serialized to JSON.

pub mod health;
pub mod shorten;
pub mod stats;

use serde::Deserialize;

/// Query string carrying a short code (`?code=ab12cd`).
#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    pub code: Option<String>,
}
