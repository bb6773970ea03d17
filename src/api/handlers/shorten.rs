//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded`:
///
/// ```text
/// url=https%3A%2F%2Fexample.com%2Flong%2Fpath&validity=1
/// ```
///
/// - `url` - target URL, stored as given (default: empty)
/// - `validity` - minutes until expiry (default: 30)
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "ab12cd",
///   "short_url": "http://short.yerva/redirect?code=ab12cd",
///   "target_url": "https://example.com/long/path",
///   "expires_at": "2025-01-01T12:01:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be decoded as a form or
/// `validity` is not a non-negative integer.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: ShortenForm,
) -> Result<impl IntoResponse, AppError> {
    let link = state
        .link_service
        .shorten(form.url, form.validity.as_deref())?;

    Ok((StatusCode::CREATED, Json(ShortenResponse::from(link))))
}

/// Rejects any method other than `POST` on `/shorten`.
///
/// Responds with 405 and an `Allow: POST` header.
pub async fn shorten_method_not_allowed(method: Method) -> impl IntoResponse {
    (
        [(header::ALLOW, HeaderValue::from_static("POST"))],
        AppError::method_not_allowed(
            "Only POST is allowed",
            json!({ "method": method.as_str(), "allowed": ["POST"] }),
        ),
    )
}
