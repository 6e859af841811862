//! GalaxyStats - Per-owner reset bookkeeping
//!
//! Kept as its own record so a galaxy reset leaves an auditable marker even
//! after every object and session is gone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GalaxyStats - Zeroed counters written when an owner resets their galaxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyStats {
    pub owner_id: String,
    pub stars_count: i64,
    pub sessions_count: i64,
    pub streak: i64,
    pub level: i64,
    pub last_reset_at: DateTime<Utc>,
}

impl GalaxyStats {
    /// Fresh zeroed stats for an owner, stamped now
    pub fn reset_now(owner_id: String) -> Self {
        Self {
            owner_id,
            stars_count: 0,
            sessions_count: 0,
            streak: 0,
            level: 0,
            last_reset_at: Utc::now(),
        }
    }
}
