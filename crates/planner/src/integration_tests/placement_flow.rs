use crate::catalog::{Catalog, ResourceKind};
use crate::config::{PlannerConfig, RotationMode};
use crate::placement::PlacementRejection;
use crate::plugin::{LayoutChanged, RejectedEdit};
use crate::test_harness::{definition, TestPlanner};

const RAMP: &str = "resistance-scaffolding-ramp"; // 3x1
const PYLON: &str = "resistance-low-pylon"; // 1x1
const GUARDHOUSE: &str = "soviet-guardhouse"; // 3x5

// ===========================================================================
// Placement through request events
// ===========================================================================

#[test]
fn test_plugin_starts_with_builtin_catalog_and_empty_layout() {
    let planner = TestPlanner::new();
    assert_eq!(planner.catalog().len(), 44);
    assert!(planner.layout().is_empty());
    assert!(!planner.editor().can_undo());
    assert!(!planner.editor().can_redo());
}

#[test]
fn test_scenario_ramp_then_pylon() {
    let mut planner = TestPlanner::new();
    planner.place(RAMP, 0, 0).tick();
    assert_eq!(planner.layout().len(), 1);
    planner.drain_changes();

    // Overlapping the ramp.
    planner.place(PYLON, 0, 0).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(rejections.len(), 1);
    assert!(matches!(
        rejections[0].reason,
        PlacementRejection::Collision(_)
    ));
    assert_eq!(
        rejections[0].edit,
        RejectedEdit::Place {
            item_id: PYLON.to_string(),
            x: 0,
            y: 0
        }
    );

    // Touching the ramp's right edge.
    planner.place(PYLON, 3, 0).tick();
    assert!(planner.drain_rejections().is_empty());
    assert_eq!(
        planner.drain_changes(),
        vec![LayoutChanged { snapshot_index: 2 }]
    );

    // Off the grid.
    planner.place(PYLON, 101, 0).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(rejections[0].reason, PlacementRejection::OutOfBounds);

    assert_eq!(planner.layout().len(), 2);
}

#[test]
fn test_unknown_catalog_id_is_rejected() {
    let mut planner = TestPlanner::new();
    planner.place("does-not-exist", 5, 5).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].reason, PlacementRejection::UnknownDefinition);
    assert!(planner.layout().is_empty());
    assert_eq!(planner.editor().history().len(), 1);
}

#[test]
fn test_several_requests_in_one_frame_apply_in_order() {
    let mut planner = TestPlanner::new();
    planner
        .place(GUARDHOUSE, 10, 10)
        .place(GUARDHOUSE, 11, 11)
        .place(GUARDHOUSE, 13, 10)
        .tick();
    assert_eq!(planner.layout().len(), 2);
    assert_eq!(planner.drain_rejections().len(), 1);
    assert_eq!(planner.drain_changes().len(), 2);
}

#[test]
fn test_move_request_revalidates_excluding_self() {
    let mut planner = TestPlanner::new();
    planner.place(RAMP, 0, 0).place(RAMP, 0, 1).tick();
    let first = planner.handle_at(0, 0).unwrap();

    planner.move_item(first, 1, 0).tick();
    assert!(planner.drain_rejections().is_empty());
    assert_eq!(planner.layout().get(first).unwrap().x, 1);

    planner.move_item(first, 0, 1).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(rejections.len(), 1);
    assert!(matches!(rejections[0].edit, RejectedEdit::Move { x: 0, y: 1, .. }));
    assert_eq!(planner.layout().get(first).unwrap().y, 0);
}

#[test]
fn test_rotate_request_keeps_footprint_in_cosmetic_mode() {
    let mut planner = TestPlanner::new();
    planner.place(RAMP, 50, 99).tick();
    let ramp = planner.handle_at(50, 99).unwrap();

    planner.rotate(ramp).tick();
    let rotated = planner.layout().get(ramp).unwrap();
    assert_eq!(rotated.rotation, 90);
    assert_eq!(rotated.rect().height, 1);
    assert!(planner.drain_rejections().is_empty());
}

#[test]
fn test_rotate_request_rejected_in_swap_mode() {
    let mut planner = TestPlanner::with_config(PlannerConfig {
        rotation: RotationMode::SwapFootprint,
        ..Default::default()
    });
    planner.place(RAMP, 50, 99).tick();
    let ramp = planner.handle_at(50, 99).unwrap();

    planner.rotate(ramp).tick();
    let rejections = planner.drain_rejections();
    assert_eq!(
        rejections[0].edit,
        RejectedEdit::Rotate { handle: ramp }
    );
    assert_eq!(rejections[0].reason, PlacementRejection::OutOfBounds);
    assert_eq!(planner.layout().get(ramp).unwrap().rotation, 0);
}

#[test]
fn test_remove_request_and_repeat_is_noop() {
    let mut planner = TestPlanner::new();
    planner.place(PYLON, 4, 4).tick();
    let pylon = planner.handle_at(4, 4).unwrap();
    planner.drain_changes();

    planner.remove(pylon).tick();
    assert!(planner.layout().is_empty());
    assert_eq!(planner.drain_changes().len(), 1);
    let history_len = planner.editor().history().len();

    planner.remove(pylon).tick();
    assert!(planner.drain_changes().is_empty());
    assert_eq!(planner.editor().history().len(), history_len);
}

#[test]
fn test_resource_totals_follow_edits() {
    let mut planner = TestPlanner::new();
    // Guardhouse: Steel 8, Textile 8. Low pylon: Wood 2, Textile 2.
    planner.place(GUARDHOUSE, 0, 0).place(PYLON, 10, 10).tick();
    let totals = planner.layout().resource_totals();
    assert_eq!(totals.get(&ResourceKind::Steel), Some(&8));
    assert_eq!(totals.get(&ResourceKind::Textile), Some(&10));
    assert_eq!(totals.get(&ResourceKind::Wood), Some(&2));

    let pylon = planner.handle_at(10, 10).unwrap();
    planner.remove(pylon).tick();
    let totals = planner.layout().resource_totals();
    assert_eq!(totals.get(&ResourceKind::Textile), Some(&8));
    assert_eq!(totals.get(&ResourceKind::Wood), None);

    let counts = planner.layout().counts_by_definition();
    assert_eq!(counts.get(GUARDHOUSE), Some(&1));
    assert_eq!(counts.get(PYLON), None);
}

#[test]
fn test_custom_catalog_replaces_builtin() {
    let catalog = Catalog::new(vec![definition("block", 10, 10)]).unwrap();
    let mut planner = TestPlanner::with_catalog(catalog);
    assert_eq!(planner.catalog().len(), 1);

    planner.place("block", 90, 90).place(PYLON, 0, 0).tick();
    assert_eq!(planner.layout().len(), 1);
    assert_eq!(
        planner.drain_rejections()[0].reason,
        PlacementRejection::UnknownDefinition
    );
}

#[test]
fn test_fill_a_row_edge_to_edge() {
    let mut planner = TestPlanner::new();
    for x in (0..99).step_by(3) {
        planner.place(RAMP, x, 0);
    }
    planner.tick();
    assert_eq!(planner.layout().len(), 33);
    assert!(planner.drain_rejections().is_empty());

    // Cell 99 is the only free one left in row 0.
    planner.place(RAMP, 97, 0).place(PYLON, 99, 0).tick();
    assert_eq!(planner.layout().len(), 34);
    assert_eq!(planner.drain_rejections().len(), 1);
}
