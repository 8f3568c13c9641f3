//! Placement validator: bounds and pairwise overlap checks.
//!
//! Pure predicates over a candidate rectangle and a layout. Every edit that
//! adds an item or changes where one sits goes through here first.

use std::fmt;

use crate::config::RotationMode;
use crate::grid::GridRect;
use crate::layout::{ItemHandle, Layout};

/// Why a candidate placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRejection {
    /// Some cell of the footprint falls off the grid.
    OutOfBounds,
    /// The footprint overlaps the item behind this handle.
    Collision(ItemHandle),
    /// The item being moved or rotated is not in the layout.
    MissingItem,
    /// The requested catalog id does not exist.
    UnknownDefinition,
}

impl fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementRejection::OutOfBounds => write!(f, "out of bounds"),
            PlacementRejection::Collision(other) => {
                write!(f, "overlaps placed item #{}", other.raw())
            }
            PlacementRejection::MissingItem => write!(f, "item is not on the layout"),
            PlacementRejection::UnknownDefinition => write!(f, "unknown catalog item"),
        }
    }
}

/// Check `candidate` against the grid bounds and every item in `layout`
/// except `excluding`, using each item's footprint under `rotation`.
pub fn check_placement(
    candidate: GridRect,
    layout: &Layout,
    excluding: Option<ItemHandle>,
    rotation: RotationMode,
) -> Result<(), PlacementRejection> {
    if !candidate.within_bounds() {
        return Err(PlacementRejection::OutOfBounds);
    }
    let collision = layout
        .iter()
        .filter(|(handle, _)| Some(*handle) != excluding)
        .find(|(_, item)| item.footprint_rect(rotation).overlaps(&candidate));
    match collision {
        Some((handle, _)) => Err(PlacementRejection::Collision(handle)),
        None => Ok(()),
    }
}

/// True when `candidate` is on the grid and overlaps nothing in `layout`
/// other than `excluding`. Footprints are taken as authored.
pub fn is_placement_valid(
    candidate: GridRect,
    layout: &Layout,
    excluding: Option<ItemHandle>,
) -> bool {
    check_placement(candidate, layout, excluding, RotationMode::Cosmetic).is_ok()
}
