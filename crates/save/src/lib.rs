//! Persistence for planner layouts: a string blob store per platform, the
//! JSON layout codec and a Bevy plugin wiring save/load requests to the
//! editor.

mod blob_store;
#[cfg(not(target_arch = "wasm32"))]
mod file_store;
mod gateway;
mod layout_codec;
#[cfg(target_arch = "wasm32")]
mod local_storage;
mod save_error;
mod save_plugin;

pub use blob_store::{BlobStore, MemoryBlobStore};
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileBlobStore;
pub use gateway::{clear_saved_layout, load_into_editor, load_layout, save_layout};
pub use layout_codec::{decode_layout, encode_layout};
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageBlobStore;
pub use save_error::SaveError;
#[cfg(not(target_arch = "wasm32"))]
pub use save_plugin::DEFAULT_SAVE_DIR;
pub use save_plugin::{
    handle_load_requests, handle_save_requests, ActiveBlobStore, LayoutLoaded, LayoutSaved,
    LoadLayoutEvent, PersistenceFailed, SaveLayoutEvent, SavePlugin,
};
