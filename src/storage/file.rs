use super::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub const DEFAULT_STORAGE_DIR: &str = "./.instance";

/// Directory-backed storage. Each key is kept in its own `<key>.json` file.
#[derive(Debug)]
pub struct FileStorage {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            medium: "file".to_string(),
            dir: dir.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Ok(Some(data))
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        // Readers only ever see the old file or the complete new one. The
        // temp file is removed on drop if any step fails.
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
