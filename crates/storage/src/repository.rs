use async_trait::async_trait;
use roadmap_core::ProgressMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),
}

/// Persistence collaborator for item completion flags.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Replace the saved flags with `progress`.
    async fn save(&self, progress: &ProgressMap) -> Result<(), StorageError>;

    /// Load the saved flags. An empty map means nothing was saved.
    async fn load(&self) -> Result<ProgressMap, StorageError>;
}

/// Session-scoped storage: flags live only as long as the process.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    progress: Arc<Mutex<ProgressMap>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `progress`.
    #[must_use]
    pub fn with_progress(progress: ProgressMap) -> Self {
        Self {
            progress: Arc::new(Mutex::new(progress)),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn save(&self, progress: &ProgressMap) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clone_from(progress);
        Ok(())
    }

    async fn load(&self) -> Result<ProgressMap, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}
