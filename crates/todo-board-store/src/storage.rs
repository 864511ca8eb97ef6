//! Key-Value Storage
//!
//! Durable storage the project store writes its whole collection into.
//! The browser's `localStorage` is one implementation; `MemoryStorage`
//! backs tests and non-browser hosts.

use std::collections::HashMap;
use thiserror::Error;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage that counts successful writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    /// Number of successful `set_item` calls
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
