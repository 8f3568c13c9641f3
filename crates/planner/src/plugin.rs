//! Bevy events and systems that drive the `LayoutEditor`.
//!
//! A UI sends `EditRequest` events for finalized edits (a drop, a click on
//! the rotate button, a toolbar action, undo/redo). In-progress drag
//! previews never reach this system, so history only ever sees committed
//! edits. Outcomes are reported back through `LayoutChanged` and
//! `EditRejected`.

use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::editor::LayoutEditor;
use crate::layout::ItemHandle;
use crate::placement::PlacementRejection;

// =============================================================================
// Request events
// =============================================================================

/// One committed edit from the UI: a drop, a rotate click, a toolbar
/// action. Requests are applied strictly in the order they were sent, each
/// one validated against the layout left by the previous one.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum EditRequest {
    /// Drop a new catalog item onto the grid.
    Place { item_id: String, x: i32, y: i32 },
    /// Drop an already placed item at a new origin.
    Move { handle: ItemHandle, x: i32, y: i32 },
    Rotate { handle: ItemHandle },
    Remove { handle: ItemHandle },
    /// Toolbar "reset layout".
    Reset,
    Undo,
    Redo,
}

// =============================================================================
// Outcome events
// =============================================================================

/// The editor's layout was replaced. `snapshot_index` is the history cursor
/// afterwards.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChanged {
    pub snapshot_index: usize,
}

/// The edit a rejection refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectedEdit {
    Place { item_id: String, x: i32, y: i32 },
    Move { handle: ItemHandle, x: i32, y: i32 },
    Rotate { handle: ItemHandle },
}

/// A requested edit was refused. The layout and history are unchanged.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct EditRejected {
    pub edit: RejectedEdit,
    pub reason: PlacementRejection,
}

// =============================================================================
// Systems
// =============================================================================

/// Applies this frame's `EditRequest`s in send order.
pub fn handle_edit_requests(
    mut requests: EventReader<EditRequest>,
    catalog: Res<Catalog>,
    mut editor: ResMut<LayoutEditor>,
    mut changed: EventWriter<LayoutChanged>,
    mut rejected: EventWriter<EditRejected>,
) {
    for request in requests.read() {
        let outcome = match request {
            EditRequest::Place { item_id, x, y } => {
                let placed = match catalog.get(item_id) {
                    Some(definition) => {
                        editor.propose_placement(definition, *x, *y).map(|_| ())
                    }
                    None => Err(PlacementRejection::UnknownDefinition),
                };
                placed.map(|()| true).map_err(|reason| {
                    debug!("Placement of '{item_id}' at ({x}, {y}) rejected: {reason}");
                    EditRejected {
                        edit: RejectedEdit::Place {
                            item_id: item_id.clone(),
                            x: *x,
                            y: *y,
                        },
                        reason,
                    }
                })
            }
            EditRequest::Move { handle, x, y } => editor
                .propose_move(*handle, *x, *y)
                .map(|()| true)
                .map_err(|reason| EditRejected {
                    edit: RejectedEdit::Move {
                        handle: *handle,
                        x: *x,
                        y: *y,
                    },
                    reason,
                }),
            EditRequest::Rotate { handle } => editor
                .propose_rotate(*handle)
                .map(|_| true)
                .map_err(|reason| EditRejected {
                    edit: RejectedEdit::Rotate { handle: *handle },
                    reason,
                }),
            EditRequest::Remove { handle } => Ok(editor.remove_item(*handle)),
            EditRequest::Reset => {
                editor.reset();
                info!("Layout reset");
                Ok(true)
            }
            EditRequest::Undo => Ok(editor.undo()),
            EditRequest::Redo => Ok(editor.redo()),
        };

        match outcome {
            Ok(true) => {
                changed.send(LayoutChanged {
                    snapshot_index: editor.history().index(),
                });
            }
            // Missing handle or history boundary: nothing happened.
            Ok(false) => {}
            Err(rejection) => {
                rejected.send(rejection);
            }
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

/// Registers the catalog, config and editor resources and the edit system.
///
/// A `Catalog` or `PlannerConfig` inserted before this plugin is kept;
/// otherwise the built-in catalog and the default config are used.
pub struct PlannerPlugin;

impl Plugin for PlannerPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Catalog>() {
            let catalog = match Catalog::builtin() {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!("Built-in catalog failed to load: {e}");
                    Catalog::default()
                }
            };
            info!("Loaded catalog with {} items", catalog.len());
            app.insert_resource(catalog);
        }

        app.init_resource::<PlannerConfig>();
        if !app.world().contains_resource::<LayoutEditor>() {
            let editor = LayoutEditor::new(app.world().resource::<PlannerConfig>());
            app.insert_resource(editor);
        }

        app.add_event::<EditRequest>()
            .add_event::<LayoutChanged>()
            .add_event::<EditRejected>()
            .add_systems(Update, handle_edit_requests);
    }
}
