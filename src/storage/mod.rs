pub mod file;
pub mod memory;

use crate::prelude::AppError;
use std::fs;
use std::path::Path;

pub use file::{DEFAULT_STORAGE_DIR, FileStorage};
pub use memory::MemoryStorage;

/// Synchronous key-value byte storage the contact store persists into.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing has been written under `key` yet.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Replaces whatever is stored under `key`.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    File,
}

impl StorageMediums {
    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_file(&self) -> bool {
        matches!(self, StorageMediums::File)
    }

    pub fn is_which(&self) -> &str {
        if self.is_mem() { "mem" } else { "file" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "mem" => Ok(StorageMediums::Mem),
            "file" => Ok(StorageMediums::File),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
