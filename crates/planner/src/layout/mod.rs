//! Layout store: the placed items currently on the grid.

pub mod placed;
pub mod store;
pub mod tally;


pub use placed::{ItemHandle, PlacedItem};
pub use store::Layout;
