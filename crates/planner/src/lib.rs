//! Grid placement engine for base layout planning.
//!
//! Catalog items are placed on a fixed 100x100 grid. The engine validates
//! bounds and collisions, keeps the layout as immutable snapshots and offers
//! linear undo/redo over them. Persistence lives in the `save` crate.

pub mod catalog;
pub mod config;
pub mod editor;
pub mod grid;
pub mod history;
pub mod layout;
pub mod placement;
pub mod plugin;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use catalog::{Catalog, CatalogError, Category, ItemDefinition, ResourceKind};
pub use config::{PlannerConfig, RotationMode, GRID_SIZE, STORAGE_KEY};
pub use editor::LayoutEditor;
pub use grid::GridRect;
pub use history::LayoutHistory;
pub use layout::{ItemHandle, Layout, PlacedItem};
pub use placement::{check_placement, is_placement_valid, PlacementRejection};
pub use plugin::{
    handle_edit_requests, EditRejected, EditRequest, LayoutChanged, PlannerPlugin, RejectedEdit,
};
