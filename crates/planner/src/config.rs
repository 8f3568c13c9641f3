use bevy::prelude::*;

/// Side length of the square placement surface, in grid cells.
pub const GRID_SIZE: i32 = 100;

/// Key the saved layout blob is stored under.
pub const STORAGE_KEY: &str = "baseLayout";

/// Degrees added by one rotate action.
pub const ROTATION_STEP: u32 = 90;

/// How a placed item's rotation interacts with its footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Rotation is purely visual. The authored width/height are used for
    /// bounds and collision at every angle, and rotating is never rejected.
    #[default]
    Cosmetic,
    /// At 90° and 270° the footprint is treated as height x width, and a
    /// rotation whose swapped footprint would leave the grid or collide is
    /// rejected.
    SwapFootprint,
}

/// Runtime knobs for the layout editor.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub rotation: RotationMode,
    /// Maximum number of snapshots kept in history. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            rotation: RotationMode::Cosmetic,
            history_limit: None,
        }
    }
}
