//! Repository trait for entity persistence

use crate::core::Entity;
use crate::core::error::StorageError;
use async_trait::async_trait;
use tokio::sync::MutexGuard;
use uuid::Uuid;

/// Guard returned by [`Repository::write_lock`].
///
/// While held, no other caller can run a read-modify-write sequence against
/// the same repository instance.
pub type WriteGuard<'a> = MutexGuard<'a, ()>;

/// Predicate used by the filtered reads
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Storage of a homogeneous entity collection addressed by identifier.
///
/// Implementations keep the whole collection in memory and treat it as the
/// source of truth for the lifetime of the process. Every mutation rewrites
/// the complete backing store; a failed write is reported but the in-memory
/// mutation is kept.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert or replace an entity by id, then persist the collection.
    ///
    /// An existing entry is replaced in place so the order of untouched
    /// entries is preserved; a new entry is appended.
    async fn save(&self, entity: T) -> Result<T, StorageError>;

    /// Get an entity by id, `None` when absent
    async fn find_by_id(&self, id: &Uuid) -> Option<T>;

    /// Get an owned copy of the whole collection
    async fn find_all(&self) -> Vec<T>;

    /// Remove an entity by id.
    ///
    /// Returns `Ok(false)` for an unknown id; the store is only rewritten
    /// when something was removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError>;

    /// Get every entity matching the predicate, in storage order
    async fn find_where(&self, predicate: Predicate<'_, T>) -> Vec<T>;

    /// Get the first entity matching the predicate
    async fn find_one_where(&self, predicate: Predicate<'_, T>) -> Option<T>;

    /// Acquire the read-modify-write boundary of this repository
    async fn write_lock(&self) -> WriteGuard<'_>;
}
