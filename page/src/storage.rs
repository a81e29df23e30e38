//! Page-scoped key-value storage.
//!
//! The page persists exactly one preference. Browsers back this with
//! `localStorage`; tests and native builds use [`MemoryStore`].

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// The subset of the Web Storage API the page relies on.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// An in-memory store. Can be built in an "unavailable" mode to mimic a
/// browser with storage disabled.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with [`StorageError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            items: HashMap::new(),
            unavailable: true,
        }
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("theme"), Ok(None));
        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme"), Ok(Some("dark".to_string())));
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn test_unavailable_store_fails_every_call() {
        let mut store = MemoryStore::unavailable();
        assert_eq!(store.get_item("theme"), Err(StorageError::Unavailable));
        assert_eq!(
            store.set_item("theme", "dark"),
            Err(StorageError::Unavailable)
        );
    }
}
