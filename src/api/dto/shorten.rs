//! DTOs for link shortening endpoint.

use axum::{
    Form,
    extract::{FromRequest, Request},
    http::{HeaderValue, header},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::services::ShortenedLink;
use crate::error::AppError;

/// Form body of `POST /shorten`.
///
/// `validity` is kept as raw text so that a non-numeric value surfaces as
/// a validation error rather than a generic decoding failure.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// The URL to shorten. Stored as given, empty allowed.
    #[serde(default)]
    pub url: String,

    /// Validity window in minutes (default applies when absent or empty).
    pub validity: Option<String>,
}

/// Reads the body as `application/x-www-form-urlencoded`.
///
/// A request without `Content-Type` is decoded as a form, so an empty
/// `POST /shorten` yields an empty form. Undecodable bodies become
/// [`AppError::Validation`].
impl<S> FromRequest<S> for ShortenForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            req.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
        }

        match Form::<ShortenForm>::from_request(req, state).await {
            Ok(Form(form)) => Ok(form),
            Err(rejection) => Err(AppError::bad_request(
                "Invalid form body",
                json!({ "reason": rejection.body_text() }),
            )),
        }
    }
}

/// Response of `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub expires_at: DateTime<Utc>,
}

impl From<ShortenedLink> for ShortenResponse {
    fn from(link: ShortenedLink) -> Self {
        Self {
            code: link.code,
            short_url: link.short_url,
            target_url: link.target_url,
            expires_at: link.expires_at,
        }
    }
}
