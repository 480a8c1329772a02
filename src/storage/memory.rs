use super::*;
use std::collections::HashMap;

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub data: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.data.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
