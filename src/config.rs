use crate::prelude::{AppError, ContactStore};
use crate::storage::{DEFAULT_STORAGE_DIR, FileStorage, KeyValueStore, MemoryStorage, StorageMediums};
use std::path::PathBuf;

/// Where the contact list is kept between runs.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub medium: StorageMediums,
    pub storage_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            medium: StorageMediums::File,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StoreConfig {
    pub fn new(medium: &str, storage_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self {
            medium: StorageMediums::from(medium)?,
            storage_dir: storage_dir.into(),
        })
    }

    pub fn storage(&self) -> Box<dyn KeyValueStore> {
        match self.medium {
            StorageMediums::Mem => Box::new(MemoryStorage::new()),
            StorageMediums::File => Box::new(FileStorage::new(&self.storage_dir)),
        }
    }

    /// Opens the configured storage and restores the contact list from it.
    pub fn open_store(&self) -> ContactStore {
        ContactStore::open(self.storage())
    }
}
