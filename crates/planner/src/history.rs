//! Linear undo/redo history over whole-layout snapshots.
//!
//! `LayoutHistory` keeps every committed layout plus a cursor. Undo and redo
//! move the cursor; pushing after an undo discards the undone future. Each
//! snapshot is an owned `Layout`, and layouts are never mutated in place, so
//! a stored snapshot can't change after it is pushed.

use crate::layout::Layout;

/// Snapshot timeline with a current index.
#[derive(Debug, Clone)]
pub struct LayoutHistory {
    snapshots: Vec<Layout>,
    index: usize,
    limit: Option<usize>,
}

impl Default for LayoutHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutHistory {
    /// A fresh history holding only the empty layout.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Layout::new()],
            index: 0,
            limit: None,
        }
    }

    /// A fresh history that keeps at most `limit` snapshots (minimum one).
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|n| n.max(1)),
            ..Self::new()
        }
    }

    /// Record `layout` as the newest snapshot, discarding any redo future.
    /// When a limit is set, the oldest snapshots are dropped to fit it.
    pub fn push(&mut self, layout: Layout) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(layout);
        if let Some(limit) = self.limit {
            let excess = self.snapshots.len().saturating_sub(limit);
            if excess > 0 {
                self.snapshots.drain(..excess);
            }
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. Returns `None` at the start of history.
    pub fn undo(&mut self) -> Option<&Layout> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index)
    }

    /// Step forward one snapshot. Returns `None` at the end of history.
    pub fn redo(&mut self) -> Option<&Layout> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Layout {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: history starts with the empty layout.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
