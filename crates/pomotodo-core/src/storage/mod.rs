//! Local key-value storage.
//!
//! The settings store and the CLI host persist through the [`KeyValueStore`]
//! trait rather than a concrete backend, so tests can substitute an
//! in-memory map for the on-disk SQLite store.

mod sqlite;

pub use sqlite::SqliteStore;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StorageError;

/// Abstraction over a local string key-value store.
///
/// Both methods take `&self`; implementations handle their own interior
/// mutability where needed.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self
            .map
            .lock()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns `~/.config/pomotodo[-dev]/` based on POMOTODO_ENV.
///
/// Set POMOTODO_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POMOTODO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pomotodo-dev")
    } else {
        base_dir.join("pomotodo")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
