//! Storage implementations for different backends

mod collection;
pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::{Entity, Repository, StorageError};
use std::sync::Arc;

/// Open the repository for `T` selected by `config`
pub async fn open_repository<T: Entity>(
    config: &StorageConfig,
) -> Result<Arc<dyn Repository<T>>, StorageError> {
    let repo: Arc<dyn Repository<T>> = match config.backend {
        StorageBackend::JsonFile => {
            Arc::new(JsonFileRepository::<T>::open_in(&config.data_dir).await?)
        }
        StorageBackend::InMemory => Arc::new(InMemoryRepository::<T>::new()),
    };
    Ok(repo)
}
