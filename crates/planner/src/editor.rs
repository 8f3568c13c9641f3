//! `LayoutEditor`: the single editing session a UI talks to.
//!
//! Combines the current layout, its history and the validator. Every
//! accepted edit produces a new layout that is committed as a history
//! snapshot; rejected or no-op edits leave both untouched.

use bevy::prelude::*;

use crate::catalog::ItemDefinition;
use crate::config::{PlannerConfig, RotationMode};
use crate::grid::GridRect;
use crate::history::LayoutHistory;
use crate::layout::{ItemHandle, Layout, PlacedItem};
use crate::placement::{check_placement, PlacementRejection};

#[derive(Resource, Debug, Clone)]
pub struct LayoutEditor {
    layout: Layout,
    history: LayoutHistory,
    rotation: RotationMode,
    /// Next handle to issue. Only ever grows, across undo, redo and loads.
    next_handle: u32,
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new(&PlannerConfig::default())
    }
}

impl LayoutEditor {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            layout: Layout::new(),
            history: LayoutHistory::with_limit(config.history_limit),
            rotation: config.rotation,
            next_handle: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn history(&self) -> &LayoutHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Place a new instance of `definition` with its top-left cell at `(x, y)`.
    pub fn propose_placement(
        &mut self,
        definition: &ItemDefinition,
        x: i32,
        y: i32,
    ) -> Result<ItemHandle, PlacementRejection> {
        let item = PlacedItem::new(definition.clone(), x, y);
        check_placement(item.footprint_rect(self.rotation), &self.layout, None, self.rotation)?;
        let handle = self.issue_handle();
        let next = self.layout.insert(handle, item);
        self.commit(next);
        debug!(
            "Placed '{}' at ({}, {}) as #{}",
            definition.id,
            x,
            y,
            handle.raw()
        );
        Ok(handle)
    }

    /// Move a placed item so its top-left cell is at `(x, y)`.
    pub fn propose_move(
        &mut self,
        handle: ItemHandle,
        x: i32,
        y: i32,
    ) -> Result<(), PlacementRejection> {
        let current = self
            .layout
            .get(handle)
            .ok_or(PlacementRejection::MissingItem)?;
        let moved = current.moved_to(x, y);
        check_placement(
            moved.footprint_rect(self.rotation),
            &self.layout,
            Some(handle),
            self.rotation,
        )?;
        let next = self.layout.replace(handle, moved);
        self.commit(next);
        debug!("Moved #{} to ({}, {})", handle.raw(), x, y);
        Ok(())
    }

    /// Turn a placed item one step clockwise and return its new state.
    ///
    /// In `RotationMode::Cosmetic` this is accepted whenever the item exists.
    /// In `RotationMode::SwapFootprint` the turned footprint must still be
    /// on the grid and clear of other items.
    pub fn propose_rotate(&mut self, handle: ItemHandle) -> Result<PlacedItem, PlacementRejection> {
        let rotated = self
            .layout
            .get(handle)
            .ok_or(PlacementRejection::MissingItem)?
            .rotated();
        if self.rotation == RotationMode::SwapFootprint {
            let footprint: GridRect = rotated.footprint_rect(self.rotation);
            check_placement(footprint, &self.layout, Some(handle), self.rotation)?;
        }
        let next = self.layout.replace(handle, rotated.clone());
        self.commit(next);
        debug!("Rotated #{} to {}°", handle.raw(), rotated.rotation);
        Ok(rotated)
    }

    /// Delete a placed item. Returns false, without touching history, when
    /// the handle is not on the layout.
    pub fn remove_item(&mut self, handle: ItemHandle) -> bool {
        if !self.layout.contains(handle) {
            return false;
        }
        let next = self.layout.remove(handle);
        self.commit(next);
        debug!("Removed #{}", handle.raw());
        true
    }

    /// Clear the layout. Undoable like any other edit.
    pub fn reset(&mut self) {
        let next = self.layout.reset();
        self.commit(next);
    }

    /// Restore the previous snapshot. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.layout = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply the next snapshot. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.layout = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Replace the layout wholesale with one read from storage. The loaded
    /// layout is pushed as a new snapshot so loading can be undone. It is
    /// not re-validated. Its items get fresh handles, so handles from before
    /// the load never alias a loaded item.
    pub fn apply_loaded(&mut self, layout: Layout) {
        let first = self.next_handle;
        let loaded = Layout::from_items_from(first, layout.to_items());
        self.next_handle = first + loaded.len() as u32;
        self.commit(loaded);
    }

    fn issue_handle(&mut self) -> ItemHandle {
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn commit(&mut self, next: Layout) {
        self.history.push(next.clone());
        self.layout = next;
    }
}
