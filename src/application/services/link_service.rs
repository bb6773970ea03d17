//! Link creation, resolution and inspection service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;
use crate::domain::registry::LinkRegistry;
use crate::error::AppError;
use crate::utils::validity::parse_validity_minutes;

/// Result of a successful shorten call.
#[derive(Debug, Clone)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Service wrapping the shared [`LinkRegistry`].
///
/// Handles validity parsing, short URL formatting and the mapping of
/// registry errors to [`AppError`].
pub struct LinkService {
    registry: Arc<LinkRegistry>,
    base_url: String,
    default_validity_minutes: u32,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used to build short URLs, with or
    /// without a trailing slash.
    pub fn new(
        registry: Arc<LinkRegistry>,
        base_url: impl Into<String>,
        default_validity_minutes: u32,
    ) -> Self {
        Self {
            registry,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_validity_minutes,
        }
    }

    /// Shortens `target_url` for the given validity window.
    ///
    /// `raw_validity` is the caller-supplied minute count as received; an
    /// absent or empty value uses the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the validity is not a
    /// non-negative integer; the registry is not touched in that case.
    ///
    /// Returns [`AppError::Internal`] if no free code could be generated.
    pub fn shorten(
        &self,
        target_url: String,
        raw_validity: Option<&str>,
    ) -> Result<ShortenedLink, AppError> {
        let validity_minutes =
            parse_validity_minutes(raw_validity, self.default_validity_minutes)?;

        let link = self.registry.create(target_url, validity_minutes)?;
        let short_url = self.short_url(&link.code);

        Ok(ShortenedLink {
            code: link.code,
            short_url,
            target_url: link.target_url,
            expires_at: link.expires_at,
        })
    }

    /// Resolves a code to its target URL, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] for codes past their expiry.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        Ok(self.registry.resolve(code)?)
    }

    /// Returns the current state of a link, expired or not.
    ///
    /// The `expired` flag is judged at the moment the snapshot is taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub fn inspect(&self, code: &str) -> Result<Link, AppError> {
        Ok(self.registry.inspect(code)?)
    }

    /// Builds the redirect-style short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/redirect?code={}", self.base_url, code)
    }

    /// Number of links held by the registry.
    pub fn link_count(&self) -> usize {
        self.registry.len()
    }
}
