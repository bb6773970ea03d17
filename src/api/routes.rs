//! API route configuration.

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, shorten_method_not_allowed, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public endpoints.
///
/// # Endpoints
///
/// - `POST /shorten`               - Create a short link (other methods: 405)
/// - `GET  /redirect?code={code}`  - Redirect to the target URL, counting a click
/// - `GET  /stats?code={code}`     - Link statistics
/// - `GET  /health`                - Health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).fallback(shorten_method_not_allowed),
        )
        .route("/redirect", get(redirect_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
}
