use crate::config::PlannerConfig;
use crate::layout::Layout;
use crate::plugin::LayoutChanged;
use crate::test_harness::TestPlanner;

const PYLON: &str = "resistance-low-pylon";
const CRATE: &str = "large-soviet-crate";

// ===========================================================================
// Undo / redo through request events
// ===========================================================================

#[test]
fn test_undo_on_fresh_planner_is_noop() {
    let mut planner = TestPlanner::new();
    planner.undo().tick();
    assert!(planner.drain_changes().is_empty());
    assert!(planner.layout().is_empty());
    assert!(!planner.editor().can_undo());
    assert_eq!(planner.editor().history().index(), 0);
}

#[test]
fn test_undo_redo_walk_three_snapshots() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 0, 0).tick();
    let a = planner.layout().clone();
    planner.place(PYLON, 1, 0).tick();
    let b = planner.layout().clone();
    assert_eq!(planner.editor().history().index(), 2);
    planner.drain_changes();

    planner.undo().tick();
    assert_eq!(planner.layout(), &a);
    assert_eq!(planner.editor().history().index(), 1);
    assert!(planner.editor().can_redo());
    assert_eq!(
        planner.drain_changes(),
        vec![LayoutChanged { snapshot_index: 1 }]
    );

    planner.redo().tick();
    assert_eq!(planner.layout(), &b);
    assert_eq!(planner.editor().history().index(), 2);
    assert!(!planner.editor().can_redo());
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 0, 0).tick();
    let a = planner.layout().clone();
    planner.place(PYLON, 5, 5).tick();
    planner.undo().tick();
    planner.place(CRATE, 20, 20).tick();

    assert!(!planner.editor().can_redo());
    planner.redo().tick();
    assert_eq!(planner.layout().len(), 2);
    assert!(planner.layout().items().any(|item| item.id() == CRATE));

    planner.undo().tick();
    assert_eq!(planner.layout(), &a);
}

#[test]
fn test_undo_restores_position_after_move() {
    let mut planner = TestPlanner::new();
    planner.place(CRATE, 0, 0).tick();
    let handle = planner.handle_at(0, 0).unwrap();
    planner.move_item(handle, 40, 40).tick();
    assert_eq!(planner.layout().get(handle).unwrap().x, 40);

    planner.undo().tick();
    assert_eq!(planner.layout().get(handle).unwrap().x, 0);
    planner.redo().tick();
    assert_eq!(planner.layout().get(handle).unwrap().x, 40);
}

#[test]
fn test_reset_then_undo_brings_layout_back() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 0, 0).place(CRATE, 10, 0).tick();
    let before = planner.layout().clone();

    planner.reset().reset().tick();
    assert!(planner.layout().is_empty());
    // Each reset is its own snapshot.
    assert_eq!(planner.editor().history().len(), 5);

    planner.undo().undo().tick();
    assert_eq!(planner.layout(), &before);
}

#[test]
fn test_undo_and_redo_in_same_frame() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 0, 0).tick();
    let placed = planner.layout().clone();
    planner.drain_changes();

    planner.undo().redo().tick();
    assert_eq!(planner.layout(), &placed);
    assert_eq!(planner.drain_changes().len(), 2);
}

#[test]
fn test_history_limit_caps_undo_depth() {
    let mut planner = TestPlanner::with_config(PlannerConfig {
        history_limit: Some(3),
        ..Default::default()
    });
    for x in 0..6 {
        planner.place(PYLON, x, 0);
    }
    planner.tick();
    assert_eq!(planner.editor().history().len(), 3);

    planner.undo().undo().undo().tick();
    assert_eq!(planner.layout().len(), 4);
    assert!(!planner.editor().can_undo());
    assert_ne!(planner.layout(), &Layout::new());
}
