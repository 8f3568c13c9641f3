//! Item definition types shared by the catalog, the layout and the save format.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// Sidebar grouping of a placeable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Walls,
    Defense,
    Stations,
    Decoration,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Walls,
        Category::Defense,
        Category::Stations,
        Category::Decoration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Walls => "Walls",
            Category::Defense => "Defense",
            Category::Stations => "Stations",
            Category::Decoration => "Decoration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// ResourceKind
// =============================================================================

/// A crafting material an item costs to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Steel,
    Cement,
    Wood,
    Textile,
    Electrolyte,
    Explosive,
    Aluminum,
    Copper,
    Lead,
    Titanium,
    Accelerant,
    Thread,
    Adhesive,
    Plastic,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 14] = [
        ResourceKind::Steel,
        ResourceKind::Cement,
        ResourceKind::Wood,
        ResourceKind::Textile,
        ResourceKind::Electrolyte,
        ResourceKind::Explosive,
        ResourceKind::Aluminum,
        ResourceKind::Copper,
        ResourceKind::Lead,
        ResourceKind::Titanium,
        ResourceKind::Accelerant,
        ResourceKind::Thread,
        ResourceKind::Adhesive,
        ResourceKind::Plastic,
    ];
}

/// Sparse cost table. A kind that is absent costs zero.
pub type ResourceCost = BTreeMap<ResourceKind, u32>;

// =============================================================================
// ItemDefinition
// =============================================================================

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Footprint in grid cells along x.
    pub width: u32,
    /// Footprint in grid cells along y.
    pub height: u32,
    pub description: String,
    #[serde(default)]
    pub resources: ResourceCost,
    /// Premium (DLC) content.
    #[serde(default, skip_serializing_if = "is_false")]
    pub dlc: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ItemDefinition {
    /// Required quantity of `kind`, zero when the item doesn't use it.
    pub fn cost_of(&self, kind: ResourceKind) -> u32 {
        self.resources.get(&kind).copied().unwrap_or(0)
    }

    /// The authored footprint as `"WxH"`.
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
