//! Save/load of the current layout under the fixed `STORAGE_KEY`.

use bevy::prelude::*;
use planner::{Layout, LayoutEditor, STORAGE_KEY};

use crate::blob_store::BlobStore;
use crate::layout_codec::{decode_layout, encode_layout};
use crate::save_error::SaveError;

/// Serialize `layout` and overwrite the stored value.
pub fn save_layout(store: &mut dyn BlobStore, layout: &Layout) -> Result<(), SaveError> {
    let json = encode_layout(layout)?;
    store.set(STORAGE_KEY, &json)?;
    debug!("Saved layout ({} items, {} bytes)", layout.len(), json.len());
    Ok(())
}

/// The stored layout, or `None` when nothing was ever saved.
pub fn load_layout(store: &dyn BlobStore) -> Result<Option<Layout>, SaveError> {
    match store.get(STORAGE_KEY)? {
        Some(json) => decode_layout(&json).map(Some),
        None => Ok(None),
    }
}

/// Forget the stored layout.
pub fn clear_saved_layout(store: &mut dyn BlobStore) -> Result<(), SaveError> {
    store.remove(STORAGE_KEY)
}

/// Load into the editor as a new undoable snapshot. Returns the number of
/// items loaded, or `None` (editor untouched) when nothing is stored.
pub fn load_into_editor(
    store: &dyn BlobStore,
    editor: &mut LayoutEditor,
) -> Result<Option<usize>, SaveError> {
    let Some(layout) = load_layout(store)? else {
        return Ok(None);
    };
    let count = layout.len();
    editor.apply_loaded(layout);
    Ok(Some(count))
}
