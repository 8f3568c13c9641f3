use crate::placement::PlacementRejection;
use crate::plugin::{EditRequest, LayoutChanged, RejectedEdit};
use crate::test_harness::TestPlanner;

const PYLON: &str = "resistance-low-pylon"; // 1x1
const RAMP: &str = "resistance-scaffolding-ramp"; // 3x1

// ===========================================================================
// Mixed requests in one frame apply in send order
// ===========================================================================

#[test]
fn test_remove_then_place_on_freed_cell() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 4, 4).tick();
    let old = planner.handle_at(4, 4).unwrap();

    planner.remove(old).place(PYLON, 4, 4).tick();
    assert!(planner.drain_rejections().is_empty());
    assert_eq!(planner.layout().len(), 1);
    let new = planner.handle_at(4, 4).unwrap();
    assert_ne!(new, old);
}

#[test]
fn test_place_then_remove_of_occupant_still_rejects_place() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 4, 4).tick();
    let occupant = planner.handle_at(4, 4).unwrap();

    planner.place(PYLON, 4, 4).remove(occupant).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].reason, PlacementRejection::Collision(occupant));
    assert!(planner.layout().is_empty());
}

#[test]
fn test_undo_then_place_keeps_new_placement() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 0, 0).tick();
    planner.drain_changes();

    planner.undo().place(PYLON, 10, 10).tick();
    assert_eq!(planner.layout().len(), 1);
    assert!(planner.handle_at(10, 10).is_some());
    assert!(planner.handle_at(0, 0).is_none());
    assert!(!planner.editor().can_redo(), "placing after undo drops the redo branch");
    assert_eq!(
        planner.drain_changes(),
        vec![
            LayoutChanged { snapshot_index: 0 },
            LayoutChanged { snapshot_index: 1 },
        ]
    );
}

#[test]
fn test_place_then_undo_in_same_frame() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 0, 0).undo().tick();
    assert!(planner.layout().is_empty());
    assert!(planner.editor().can_redo());
}

#[test]
fn test_move_into_cell_vacated_earlier_in_frame() {
    let mut planner = TestPlanner::new();
    planner.place(RAMP, 0, 0).place(PYLON, 5, 0).tick();
    let ramp = planner.handle_at(0, 0).unwrap();
    let pylon = planner.handle_at(5, 0).unwrap();

    planner
        .send(EditRequest::Move {
            handle: pylon,
            x: 50,
            y: 50,
        })
        .move_item(ramp, 4, 0)
        .tick();
    assert!(planner.drain_rejections().is_empty());
    assert_eq!(planner.layout().get(ramp).unwrap().x, 4);
    assert_eq!(planner.layout().get(pylon).unwrap().x, 50);
}

#[test]
fn test_reset_between_places_keeps_only_later_one() {
    let mut planner = TestPlanner::new();
    planner
        .place(PYLON, 1, 1)
        .reset()
        .place(PYLON, 2, 2)
        .tick();
    assert_eq!(planner.layout().len(), 1);
    assert!(planner.handle_at(2, 2).is_some());

    planner.undo().tick();
    assert!(planner.layout().is_empty());
    planner.undo().tick();
    assert!(planner.handle_at(1, 1).is_some());
}

#[test]
fn test_rotate_of_item_removed_earlier_in_frame_is_rejected() {
    let mut planner = TestPlanner::new();
    planner.place(RAMP, 0, 0).tick();
    let ramp = planner.handle_at(0, 0).unwrap();

    planner.remove(ramp).rotate(ramp).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(
        rejections[0].edit,
        RejectedEdit::Rotate { handle: ramp }
    );
    assert_eq!(rejections[0].reason, PlacementRejection::MissingItem);
}
