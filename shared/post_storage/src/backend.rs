//! Pluggable persistence backends

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::StorageResult;

/// Raw persistence boundary for the post store.
///
/// Implementations hold a single opaque value, the JSON-encoded post
/// list, under one key.
pub trait StorageBackend: Send + Sync {
    /// Loads the stored value, `None` when nothing was stored yet
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be read
    fn load(&self) -> StorageResult<Option<String>>;

    /// Replaces the stored value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written
    fn store(&self, raw: &str) -> StorageResult<()>;
}

/// File-backed storage holding the post list in a single JSON file
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend persisting to `path`; parent directories are
    /// created on the first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, raw: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory storage, the stand-in for the file backend in tests and for
/// ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    value: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Creates an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend seeded with an already-stored value
    #[must_use]
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(raw.into())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> StorageResult<Option<String>> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn store(&self, raw: &str) -> StorageResult<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_string());
        Ok(())
    }
}
