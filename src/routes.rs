//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short link
//! - `GET  /redirect`    - Resolve a short link (`?code=`)
//! - `GET  /stats`       - Inspect a short link (`?code=`)
//! - `GET  /health`      - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing as http_tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `state` is shared by every handler; it carries the one registry of
/// the process.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(http_tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
