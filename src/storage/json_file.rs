//! JSON document storage backend.
//!
//! Each entity kind lives in one file holding a JSON array of entity
//! objects. The whole array is loaded when the repository opens and the
//! whole array is rewritten after every mutation.
//!
//! # Durability
//!
//! - A missing document opens as an empty collection.
//! - An unreadable or unparsable document is logged and opens as an empty
//!   collection; it is replaced by the next successful save.
//! - Writes go to `<name>.json.tmp` and are renamed over the document, so a
//!   crash mid-write leaves the previous version intact.
//! - A failed write is returned to the caller while the in-memory
//!   collection keeps the mutation.

use crate::core::{Entity, Predicate, Repository, StorageError, WriteGuard};
use crate::storage::collection::Collection;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Repository persisting its collection to a JSON document.
///
/// # Example
///
/// ```rust,ignore
/// let users = JsonFileRepository::<User>::open_in("data").await?;
/// users.save(User::new("Wang", "13512345678")).await?;
/// ```
pub struct JsonFileRepository<T: Entity> {
    path: PathBuf,
    entities: RwLock<Collection<T>>,
    gate: Mutex<()>,
}

impl<T: Entity> JsonFileRepository<T> {
    /// Open the document `<dir>/<resource_name>.json`
    pub async fn open_in(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = dir.as_ref().join(format!("{}.json", T::resource_name()));
        Self::open(path).await
    }

    /// Open (or create on first save) the document at `path`.
    ///
    /// Only failing to create the parent directory is an error; read and
    /// parse failures fall back to an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let entities = load::<T>(&path).await;
        tracing::debug!(
            entity_type = T::resource_name_singular(),
            path = %path.display(),
            count = entities.items().len(),
            "Opened JSON repository"
        );

        Ok(Self {
            path,
            entities: RwLock::new(entities),
            gate: Mutex::new(()),
        })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entities: &Collection<T>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(entities.items()).map_err(|source| {
            StorageError::Serialization {
                entity_type: T::resource_name_singular(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        tokio::fs::write(&tmp, &bytes).await.map_err(io_error)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_error)?;

        tracing::trace!(path = %self.path.display(), bytes = bytes.len(), "Rewrote document");
        Ok(())
    }
}

async fn load<T: Entity>(path: &Path) -> Collection<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Collection::default(),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read document, starting with an empty collection"
            );
            return Collection::default();
        }
    };

    match serde_json::from_slice::<Vec<T>>(&bytes) {
        Ok(items) => Collection::new(items),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to parse document, starting with an empty collection"
            );
            Collection::default()
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for JsonFileRepository<T> {
    async fn save(&self, entity: T) -> Result<T, StorageError> {
        let mut entities = self.entities.write().await;
        entities.upsert(entity.clone());
        self.persist(&entities).await?;
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Option<T> {
        self.entities.read().await.get(id).cloned()
    }

    async fn find_all(&self) -> Vec<T> {
        self.entities.read().await.items().to_vec()
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError> {
        let mut entities = self.entities.write().await;
        if !entities.remove(id) {
            return Ok(false);
        }
        self.persist(&entities).await?;
        Ok(true)
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
