use bevy::prelude::*;
use planner::{handle_edit_requests, LayoutChanged, LayoutEditor};

use crate::blob_store::BlobStore;
use crate::gateway::{load_into_editor, save_layout};

#[cfg(not(target_arch = "wasm32"))]
use crate::file_store::FileBlobStore;
#[cfg(target_arch = "wasm32")]
use crate::local_storage::LocalStorageBlobStore;

/// Directory the native default store writes into, relative to the
/// working directory.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_SAVE_DIR: &str = "saves";

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The store save/load requests go to. Insert one before adding
/// `SavePlugin` to override the platform default (`saves/` on native,
/// `localStorage` in the browser).
#[derive(Resource)]
pub struct ActiveBlobStore(pub Box<dyn BlobStore>);

impl ActiveBlobStore {
    pub fn new(store: impl BlobStore + 'static) -> Self {
        Self(Box::new(store))
    }
}

impl Default for ActiveBlobStore {
    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        Self::new(FileBlobStore::new(DEFAULT_SAVE_DIR))
    }

    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        Self::new(LocalStorageBlobStore)
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event, Debug, Clone, Copy)]
pub struct SaveLayoutEvent;

#[derive(Event, Debug, Clone, Copy)]
pub struct LoadLayoutEvent;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSaved {
    pub item_count: usize,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutLoaded {
    pub item_count: usize,
}

/// A save or load failed. The editor and the stored value are unchanged.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PersistenceFailed {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Several save requests in one frame write once.
pub fn handle_save_requests(
    mut requests: EventReader<SaveLayoutEvent>,
    editor: Res<LayoutEditor>,
    mut store: ResMut<ActiveBlobStore>,
    mut saved: EventWriter<LayoutSaved>,
    mut failed: EventWriter<PersistenceFailed>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let layout = editor.layout();
    match save_layout(store.0.as_mut(), layout) {
        Ok(()) => {
            info!("Layout saved ({} items)", layout.len());
            saved.send(LayoutSaved {
                item_count: layout.len(),
            });
        }
        Err(e) => {
            error!("Failed to save layout: {e}");
            failed.send(PersistenceFailed {
                message: format!("Save failed: {e}"),
            });
        }
    }
}

/// Several load requests in one frame read once.
pub fn handle_load_requests(
    mut requests: EventReader<LoadLayoutEvent>,
    store: Res<ActiveBlobStore>,
    mut editor: ResMut<LayoutEditor>,
    mut loaded: EventWriter<LayoutLoaded>,
    mut changed: EventWriter<LayoutChanged>,
    mut failed: EventWriter<PersistenceFailed>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    match load_into_editor(store.0.as_ref(), &mut editor) {
        Ok(Some(item_count)) => {
            info!("Layout loaded ({item_count} items)");
            loaded.send(LayoutLoaded { item_count });
            changed.send(LayoutChanged {
                snapshot_index: editor.history().index(),
            });
        }
        Ok(None) => {
            info!("No saved layout to load");
        }
        Err(e) => {
            error!("Failed to load layout: {e}");
            failed.send(PersistenceFailed {
                message: format!("Load failed: {e}"),
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Save/load of the editor's layout. Add after `planner::PlannerPlugin`.
///
/// Requests are handled after the frame's edits, so a save sent together
/// with an edit stores the edited layout; a load is applied last and wins.
pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveBlobStore>()
            .add_event::<SaveLayoutEvent>()
            .add_event::<LoadLayoutEvent>()
            .add_event::<LayoutSaved>()
            .add_event::<LayoutLoaded>()
            .add_event::<PersistenceFailed>()
            .add_systems(
                Update,
                (handle_save_requests, handle_load_requests)
                    .chain()
                    .after(handle_edit_requests),
            );
    }
}
