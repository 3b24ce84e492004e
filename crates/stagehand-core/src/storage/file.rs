//! File-based storage implementation.

use super::{StorageError, StorageResult, WorldStore};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based storage.
///
/// Stores each world as one file in a base directory, named after the world.
#[derive(Debug)]
pub struct FileStorage {
    /// Base directory for world storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Get the file path for a world name.
    fn world_path(&self, name: &str) -> PathBuf {
        // Names come from text fields, keep them safe for filenames
        let safe_name: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(safe_name)
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl WorldStore for FileStorage {
    fn save(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.world_path(name);
        fs::write(&path, bytes).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn load(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.world_path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        fs::read(&path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        Ok(self.world_path(name).is_file())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}
