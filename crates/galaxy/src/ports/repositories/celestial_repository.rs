//! Celestial Repository Port
//!
//! Abstract interface for celestial object persistence. The placement core
//! only needs `count_by_owner` and `insert`; the remaining operations serve
//! the canvas (data fetch, drag layout, constellation merge, reset).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, CelestialObject};

/// A dragged position to persist for one object
#[derive(Debug, Clone)]
pub struct PositionUpdate {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
}

/// Repository interface for CelestialObject entities
#[async_trait]
pub trait CelestialRepository: Send + Sync {
    /// Count existing objects for an owner
    async fn count_by_owner(&self, owner_id: &str) -> Result<u64, DomainError>;

    /// Persist one object, returning it as stored
    async fn insert(&self, object: &CelestialObject) -> Result<CelestialObject, DomainError>;

    /// Persist a batch of objects (constellation merge), returning their ids
    async fn insert_many(&self, objects: &[CelestialObject]) -> Result<Vec<Uuid>, DomainError>;

    /// All objects for an owner, oldest first
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<CelestialObject>, DomainError>;

    /// Persist dragged positions; objects not listed stay untouched.
    /// Returns the number of objects actually moved.
    async fn update_positions(
        &self,
        owner_id: &str,
        updates: &[PositionUpdate],
    ) -> Result<u64, DomainError>;

    /// Delete specific objects owned by `owner_id`, returning the count removed
    async fn delete_by_ids(&self, owner_id: &str, ids: &[Uuid]) -> Result<u64, DomainError>;

    /// Delete every object for an owner (galaxy reset)
    async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DomainError>;
}
