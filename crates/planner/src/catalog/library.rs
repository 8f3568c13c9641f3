//! The `Catalog` resource: every placeable item, loaded once at startup.

use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;

use super::types::{Category, ItemDefinition};

/// Catalog shipped with the planner.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

// =============================================================================
// CatalogError
// =============================================================================

/// Reasons catalog data can be refused at load time.
#[derive(Debug)]
pub enum CatalogError {
    /// The JSON could not be parsed into item definitions.
    Parse(serde_json::Error),
    /// Two definitions share an id.
    DuplicateId(String),
    /// A definition has a zero width or height.
    EmptyFootprint(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "Catalog parse error: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate catalog id '{id}'"),
            CatalogError::EmptyFootprint(id) => {
                write!(f, "Catalog item '{id}' has an empty footprint")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable list of item definitions, in authored order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemDefinition>,
}

impl Catalog {
    /// Build a catalog from already-constructed definitions.
    pub fn new(items: Vec<ItemDefinition>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                if item.width == 0 || item.height == 0 {
                    return Err(CatalogError::EmptyFootprint(item.id.clone()));
                }
                if !seen.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateId(item.id.clone()));
                }
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of item definition records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<ItemDefinition> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// The built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
