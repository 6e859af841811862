//! Galaxy Stats Repository Port
//!
//! Abstract interface for per-owner reset bookkeeping.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, GalaxyStats};

/// Repository interface for GalaxyStats records
#[async_trait]
pub trait GalaxyStatsRepository: Send + Sync {
    /// Upsert the given stats snapshot for its owner
    async fn upsert(&self, stats: &GalaxyStats) -> Result<GalaxyStats, DomainError>;
}
