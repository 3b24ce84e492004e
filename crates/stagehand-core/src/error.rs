//! Error taxonomy for loading and running scenes.

use std::path::PathBuf;
use thiserror::Error;

use crate::storage::StorageError;
use crate::widget::FormKind;

/// Errors raised while loading descriptors, styles or the scene catalog.
///
/// Descriptors are authored offline, so every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{scene}:{line}: unknown widget type `{name}`")]
    UnknownWidgetType {
        scene: String,
        line: usize,
        name: String,
    },
    #[error("{scene}:{line}: no constructor of `{type_name}` accepts {args:?}")]
    NoMatchingConstructor {
        scene: String,
        line: usize,
        type_name: String,
        args: Vec<String>,
    },
    #[error("{scene}:{line}: `{type_name}` failed to construct: {reason}")]
    Construct {
        scene: String,
        line: usize,
        type_name: String,
        reason: String,
    },
    #[error("Scene `{0}` is defined more than once")]
    DuplicateScene(String),
    #[error("No scene named `Main` in {}", .0.display())]
    MissingMainScene(PathBuf),
}

/// Errors raised when a name does not resolve.
///
/// These indicate a content or programming error and are never recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Form field not found: {0}")]
    FieldNotFound(String),
    #[error("Scene not found: {0}")]
    SceneNotFound(String),
    #[error("Form field `{name}` holds {found}, expected {expected}")]
    WrongKind {
        name: String,
        expected: FormKind,
        found: FormKind,
    },
}

/// Errors raised while a scene is running or being entered.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Corrupt world `{name}`: {reason}")]
    CorruptWorld { name: String, reason: String },
    #[error("World `{name}` cannot be {width}x{height}")]
    InvalidWorldSize { name: String, width: i64, height: i64 },
}
