//! In-memory storage implementation.

use super::{StorageError, StorageResult, WorldStore};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    worlds: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl WorldStore for MemoryStorage {
    fn save(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        let mut worlds = self.worlds.write().map_err(lock_error)?;
        worlds.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn load(&self, name: &str) -> StorageResult<Vec<u8>> {
        let worlds = self.worlds.read().map_err(lock_error)?;
        worlds
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        let worlds = self.worlds.read().map_err(lock_error)?;
        Ok(worlds.contains_key(name))
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let worlds = self.worlds.read().map_err(lock_error)?;
        Ok(worlds.keys().cloned().collect())
    }
}
