//! # TestPlanner — headless harness for planner integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `PlannerPlugin` so tests
//! can send the same request events a UI would, tick the app, and inspect
//! the resulting editor state. Also hosts small definition builders shared
//! by the unit tests.

use bevy::app::App;
use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::catalog::{Catalog, Category, ItemDefinition, ResourceCost, ResourceKind};
use crate::config::PlannerConfig;
use crate::editor::LayoutEditor;
use crate::grid::GridRect;
use crate::layout::{ItemHandle, Layout};
use crate::plugin::{EditRejected, EditRequest, LayoutChanged, PlannerPlugin};

// -----------------------------------------------------------------------
// Definition builders
// -----------------------------------------------------------------------

/// A costless `Walls` definition with the given footprint.
pub fn definition(id: &str, width: u32, height: u32) -> ItemDefinition {
    definition_with_cost(id, width, height, &[])
}

/// A `Walls` definition with the given footprint and resource costs.
pub fn definition_with_cost(
    id: &str,
    width: u32,
    height: u32,
    cost: &[(ResourceKind, u32)],
) -> ItemDefinition {
    ItemDefinition {
        id: id.to_string(),
        name: id.to_string(),
        category: Category::Walls,
        width,
        height,
        description: String::new(),
        resources: cost.iter().copied().collect::<ResourceCost>(),
        dlc: false,
    }
}

// -----------------------------------------------------------------------
// TestPlanner
// -----------------------------------------------------------------------

/// A headless Bevy App hosting one layout editor.
pub struct TestPlanner {
    app: App,
}

impl Default for TestPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPlanner {
    /// Built-in catalog, default config.
    pub fn new() -> Self {
        Self::build(None, PlannerConfig::default())
    }

    /// Built-in catalog with a custom config.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self::build(None, config)
    }

    /// A custom catalog with the default config.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::build(Some(catalog), PlannerConfig::default())
    }

    fn build(catalog: Option<Catalog>, config: PlannerConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if let Some(catalog) = catalog {
            app.insert_resource(catalog);
        }
        app.insert_resource(config);
        app.add_plugins(PlannerPlugin);
        app.update();
        Self { app }
    }

    // -------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------

    /// Queue a request; it is processed on the next `tick`, in send order.
    pub fn send(&mut self, request: EditRequest) -> &mut Self {
        self.app.world_mut().send_event(request);
        self
    }

    pub fn place(&mut self, item_id: &str, x: i32, y: i32) -> &mut Self {
        self.send(EditRequest::Place {
            item_id: item_id.to_string(),
            x,
            y,
        })
    }

    pub fn move_item(&mut self, handle: ItemHandle, x: i32, y: i32) -> &mut Self {
        self.send(EditRequest::Move { handle, x, y })
    }

    pub fn rotate(&mut self, handle: ItemHandle) -> &mut Self {
        self.send(EditRequest::Rotate { handle })
    }

    pub fn remove(&mut self, handle: ItemHandle) -> &mut Self {
        self.send(EditRequest::Remove { handle })
    }

    pub fn reset(&mut self) -> &mut Self {
        self.send(EditRequest::Reset)
    }

    pub fn undo(&mut self) -> &mut Self {
        self.send(EditRequest::Undo)
    }

    pub fn redo(&mut self) -> &mut Self {
        self.send(EditRequest::Redo)
    }

    /// Run one app update so pending requests are processed.
    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    pub fn editor(&self) -> &LayoutEditor {
        self.app.world().resource::<LayoutEditor>()
    }

    pub fn layout(&self) -> &Layout {
        self.editor().layout()
    }

    pub fn catalog(&self) -> &Catalog {
        self.app.world().resource::<Catalog>()
    }

    /// Handle of the item covering cell `(x, y)`, by authored footprint.
    pub fn handle_at(&self, x: i32, y: i32) -> Option<ItemHandle> {
        let cell = GridRect::new(x, y, 1, 1);
        self.layout()
            .iter()
            .find(|(_, item)| item.rect().overlaps(&cell))
            .map(|(handle, _)| handle)
    }

    /// Outcome events emitted since the last drain.
    pub fn drain_changes(&mut self) -> Vec<LayoutChanged> {
        self.app
            .world_mut()
            .resource_mut::<Events<LayoutChanged>>()
            .drain()
            .collect()
    }

    /// Rejections emitted since the last drain.
    pub fn drain_rejections(&mut self) -> Vec<EditRejected> {
        self.app
            .world_mut()
            .resource_mut::<Events<EditRejected>>()
            .drain()
            .collect()
    }
}
