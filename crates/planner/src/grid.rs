use serde::{Deserialize, Serialize};

use crate::config::GRID_SIZE;

/// An axis-aligned rectangle of grid cells. `x`/`y` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl GridRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge. Widened so huge footprints can't overflow.
    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// True when every cell of the rectangle lies on the grid.
    pub fn within_bounds(&self) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= GRID_SIZE as i64
            && self.bottom() <= GRID_SIZE as i64
    }

    /// True when the two rectangles share a positive area. Rectangles that
    /// only touch along an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &GridRect) -> bool {
        !(self.right() <= other.x as i64
            || self.x as i64 >= other.right()
            || self.bottom() <= other.y as i64
            || self.y as i64 >= other.bottom())
    }
}

/// Clamp a desired origin so a `width` x `height` footprint stays on the grid.
///
/// Footprints larger than the grid are pinned to the origin.
pub fn clamp_to_grid(x: i32, y: i32, width: u32, height: u32) -> (i32, i32) {
    let max_x = (GRID_SIZE as i64 - width as i64).max(0) as i32;
    let max_y = (GRID_SIZE as i64 - height as i64).max(0) as i32;
    (x.clamp(0, max_x), y.clamp(0, max_y))
}
