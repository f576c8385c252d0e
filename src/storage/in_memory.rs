//! In-memory implementation of Repository for testing and development

use crate::core::{Entity, Predicate, Repository, StorageError, WriteGuard};
use crate::storage::collection::Collection;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// In-memory repository implementation
///
/// Nothing is written anywhere, so saves never fail. Clones share state.
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    entities: Arc<RwLock<Collection<T>>>,
    gate: Arc<Mutex<()>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    /// Create a repository seeded with `entities`
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(Collection::new(entities))),
            gate: Arc::new(Mutex::new(())),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn save(&self, entity: T) -> Result<T, StorageError> {
        self.entities.write().await.upsert(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Option<T> {
        self.entities.read().await.get(id).cloned()
    }

    async fn find_all(&self) -> Vec<T> {
        self.entities.read().await.items().to_vec()
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError> {
        Ok(self.entities.write().await.remove(id))
    }

    async fn find_where(&self, predicate: Predicate<'_, T>) -> Vec<T> {
        self.entities.read().await.filtered(predicate)
    }

    async fn find_one_where(&self, predicate: Predicate<'_, T>) -> Option<T> {
        self.entities.read().await.first(predicate)
    }

    async fn write_lock(&self) -> WriteGuard<'_> {
        self.gate.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::User;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryRepository::new();
        let user = User::new("Wang", "13512345678");

        repo.save(user.clone()).await.unwrap();

        let found = repo.find_by_id(&user.user_id).await;
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_all_is_a_copy() {
        let repo = InMemoryRepository::with_entities(vec![User::new("Wang", "1")]);

        let mut all = repo.find_all().await;
        all[0].nickname = "changed".to_string();
        all.clear();

        let again = repo.find_all().await;
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].nickname, "Wang");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();
        let user = User::new("Li", "2");

        clone.save(user.clone()).await.unwrap();
        assert!(repo.find_by_id(&user.user_id).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo: InMemoryRepository<User> = InMemoryRepository::new();
        assert!(!repo.delete(&Uuid::new_v4()).await.unwrap());
    }
}
