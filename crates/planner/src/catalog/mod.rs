//! Catalog of placeable items.
//!
//! Definitions are authored as embedded JSON and parsed once into a
//! `Catalog` that is handed to whoever needs it, as a Bevy resource or as a
//! plain `&Catalog`.

pub mod library;
pub mod types;


pub use library::{Catalog, CatalogError};
pub use types::{Category, ItemDefinition, ResourceCost, ResourceKind};
