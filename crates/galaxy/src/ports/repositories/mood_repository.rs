//! Mood Repository Port
//!
//! Abstract interface for the seeded mood palette.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Mood};

/// Repository interface for Mood entries
#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// All moods, picker order
    async fn find_all(&self) -> Result<Vec<Mood>, DomainError>;

    /// Look up one mood by its lower-case key
    async fn find_by_key(&self, key: &str) -> Result<Option<Mood>, DomainError>;
}
