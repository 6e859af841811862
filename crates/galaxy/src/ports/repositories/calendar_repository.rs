//! Calendar Repository Port
//!
//! Abstract interface for CalendarEvent persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, CalendarEvent};

/// Repository interface for CalendarEvent entities
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Events for an owner, sorted by date then time. When `month_prefix` is
    /// given (a `YYYY-MM-` string) only matching dates are returned.
    async fn find(
        &self,
        owner_id: &str,
        month_prefix: Option<String>,
    ) -> Result<Vec<CalendarEvent>, DomainError>;

    /// Insert a new event
    async fn insert(&self, event: &CalendarEvent) -> Result<CalendarEvent, DomainError>;

    /// Delete an event, returning whether it existed
    async fn delete(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError>;
}
