//! Parsing of the validity window supplied on link creation.

use serde_json::json;

use crate::error::AppError;

/// Default validity window in minutes when the caller supplies none.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Parses a validity window given in whole minutes.
///
/// An absent or empty value falls back to `default`. Anything that is not a
/// non-negative decimal integer fitting in `u32` is rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for non-numeric, negative, fractional
/// or out-of-range values.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_validity_minutes(None, 30).unwrap(), 30);
/// assert_eq!(parse_validity_minutes(Some("5"), 30).unwrap(), 5);
/// assert!(parse_validity_minutes(Some("soon"), 30).is_err());
/// ```
pub fn parse_validity_minutes(raw: Option<&str>, default: u32) -> Result<u32, AppError> {
    let raw = match raw {
        None | Some("") => return Ok(default),
        Some(value) => value,
    };

    raw.parse::<u32>().map_err(|e| {
        AppError::bad_request(
            "Validity must be a non-negative whole number of minutes",
            json!({ "validity": raw, "reason": e.to_string() }),
        )
    })
}
