//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A snapshot of a shortened link.
///
/// Returned by the registry on create and inspect. The code, target and
/// timestamps never change after creation; `click_count` and `expired`
/// are the values observed when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    /// Whether the snapshot was taken after `expires_at`.
    pub expired: bool,
}
