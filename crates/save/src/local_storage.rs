//! Browser backend over `window.localStorage`.

use web_sys::Storage;

use crate::blob_store::BlobStore;
use crate::save_error::SaveError;

/// Stateless handle; the `Storage` object is looked up on every call since
/// `web_sys` handles are not `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBlobStore;

fn storage() -> Result<Storage, SaveError> {
    let window =
        web_sys::window().ok_or_else(|| SaveError::Storage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| SaveError::Storage(format!("localStorage error: {e:?}")))?
        .ok_or_else(|| SaveError::Storage("localStorage not available".to_string()))
}

impl BlobStore for LocalStorageBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        storage()?
            .get_item(key)
            .map_err(|e| SaveError::Storage(format!("failed to read '{key}': {e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        // Quota errors land here.
        storage()?
            .set_item(key, value)
            .map_err(|e| SaveError::Storage(format!("failed to write '{key}': {e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        storage()?
            .remove_item(key)
            .map_err(|e| SaveError::Storage(format!("failed to remove '{key}': {e:?}")))
    }
}
