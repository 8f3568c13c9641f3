//! A catalog item instantiated on the grid.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemDefinition;
use crate::config::{RotationMode, ROTATION_STEP};
use crate::grid::GridRect;

/// Stable reference to one placed item inside a [`Layout`](super::Layout).
///
/// Handles identify instances, not values: two items with identical fields
/// still have different handles. A handle stays valid across moves and
/// rotations of its item and across every snapshot that contains it. Within
/// one editing session a handle is never issued twice, so a handle to an
/// item from an undone branch matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemHandle(pub(crate) u32);

impl ItemHandle {
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Item definition fields plus position and rotation.
///
/// Serializes flat: the definition's fields followed by `x`, `y`, `rotation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    #[serde(flatten)]
    pub definition: ItemDefinition,
    pub x: i32,
    pub y: i32,
    /// Degrees, a multiple of 90.
    #[serde(default)]
    pub rotation: u32,
}

impl PlacedItem {
    pub fn new(definition: ItemDefinition, x: i32, y: i32) -> Self {
        Self {
            definition,
            x,
            y,
            rotation: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.definition.id
    }

    /// Rectangle covered by the authored footprint, ignoring rotation.
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.definition.width, self.definition.height)
    }

    /// Rectangle used for bounds and collision under `mode`.
    pub fn footprint_rect(&self, mode: RotationMode) -> GridRect {
        match mode {
            RotationMode::SwapFootprint if self.is_quarter_turned() => GridRect::new(
                self.x,
                self.y,
                self.definition.height,
                self.definition.width,
            ),
            _ => self.rect(),
        }
    }

    /// True at 90° and 270°.
    pub fn is_quarter_turned(&self) -> bool {
        self.rotation % 180 == 90
    }

    /// A copy at a new origin.
    pub fn moved_to(&self, x: i32, y: i32) -> PlacedItem {
        PlacedItem {
            x,
            y,
            ..self.clone()
        }
    }

    /// A copy turned one step clockwise, normalized to `[0, 360)`.
    pub fn rotated(&self) -> PlacedItem {
        PlacedItem {
            rotation: (self.rotation % 360 + ROTATION_STEP) % 360,
            ..self.clone()
        }
    }
}
