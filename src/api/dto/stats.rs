//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for a single short link.
///
/// Reported for expired links too; `expired` tells the two apart.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub expired: bool,
}
