//! Handler for short URL redirect.

use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::CodeQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /redirect?code={code}`
///
/// Every successful call counts one click.
///
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the target URL.
///
/// # Errors
///
/// - 404 Not Found if the code is missing or unknown
/// - 410 Gone if the link has expired
/// - 500 if the stored target cannot be sent as a `Location` header
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let code = query.code.unwrap_or_default();
    let target_url = state.link_service.resolve(&code)?;

    let location = HeaderValue::try_from(target_url.as_str()).map_err(|e| {
        AppError::internal(
            "Target URL is not a valid Location header",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
