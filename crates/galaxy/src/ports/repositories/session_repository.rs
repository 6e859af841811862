//! Session Repository Port
//!
//! Abstract interface for FocusSession persistence operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{errors::DomainError, FocusSession};

/// Repository interface for FocusSession entities
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a finished session
    async fn insert(&self, session: &FocusSession) -> Result<FocusSession, DomainError>;

    /// All sessions for an owner
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<FocusSession>, DomainError>;

    /// Sessions whose `started_at` falls within `[start, end)`, oldest first
    async fn find_between(
        &self,
        owner_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusSession>, DomainError>;

    /// Delete every session for an owner (galaxy reset)
    async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DomainError>;
}
