//! Storage abstraction for persisted worlds.
//!
//! The shell never interprets world bytes; widgets that own a world format
//! encode and decode it themselves and only hand opaque buffers to the store.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("World not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for world storage backends.
///
/// Loading and saving happen synchronously; there are no suspension points
/// inside a frame.
pub trait WorldStore: Send + Sync {
    /// Save a world buffer under `name`, replacing any previous one.
    fn save(&self, name: &str, bytes: &[u8]) -> StorageResult<()>;

    /// Load the world buffer stored under `name`.
    fn load(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Check if a world exists.
    fn exists(&self, name: &str) -> StorageResult<bool>;

    /// List all stored world names.
    fn list(&self) -> StorageResult<Vec<String>>;
}
