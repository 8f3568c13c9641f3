//! Key-value string storage backing the layout gateway.
//!
//! Backends: [`MemoryBlobStore`] everywhere, [`crate::FileBlobStore`] on
//! native targets and [`crate::LocalStorageBlobStore`] in the browser.

use std::collections::HashMap;

use crate::save_error::SaveError;

/// A string store addressed by key. `get` of a key never written returns
/// `Ok(None)`; `set` replaces any previous value.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
    /// Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), SaveError>;
}

/// In-process store. Used by tests and headless apps.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        self.entries.remove(key);
        Ok(())
    }
}
