//! Handler for link statistics.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::CodeQuery;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a short link.
///
/// # Endpoint
///
/// `GET /stats?code={code}`
///
/// Works for expired links as well; it never counts a click.
///
/// # Response
///
/// ```json
/// {
///   "code": "ab12cd",
///   "target_url": "https://example.com/long/path",
///   "created_at": "2025-01-01T12:00:00Z",
///   "expires_at": "2025-01-01T12:01:00Z",
///   "click_count": 1,
///   "expired": true
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code is missing or unknown.
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let code = query.code.unwrap_or_default();
    let link = state.link_service.inspect(&code)?;

    Ok(Json(StatsResponse {
        code: link.code,
        target_url: link.target_url,
        created_at: link.created_at,
        expires_at: link.expires_at,
        click_count: link.click_count,
        expired: link.expired,
    }))
}
