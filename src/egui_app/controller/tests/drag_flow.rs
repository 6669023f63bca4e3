use egui::{Rect, pos2, vec2};

use super::super::test_support::{dummy_controller, first_slot_of};
use crate::drag::TargetId;

fn info_bounds() -> Rect {
    Rect::from_min_size(pos2(520.0, 8.0), vec2(28.0, 24.0))
}

fn remove_bounds() -> Rect {
    Rect::from_min_size(pos2(0.0, 440.0), vec2(640.0, 36.0))
}

#[test]
fn app_drag_surfaces_the_info_target_and_drop_opens_details() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    controller.report_target_bounds(TargetId::Info, info_bounds());
    controller.report_target_bounds(TargetId::Remove, remove_bounds());

    let slot = first_slot_of(controller, true);
    let expected = controller.entries()[slot]
        .component()
        .cloned()
        .expect("app entry has a component");
    let deck_before = controller.entries().to_vec();

    controller.start_entry_drag(slot, pos2(100.0, 300.0));
    assert!(controller.info_target_visible());
    assert!(controller.remove_target_visible());
    assert!(!controller.handle_visible());

    controller.update_active_drag(info_bounds().center());
    assert_eq!(controller.hovered_target(), Some(TargetId::Info));
    let (_, preview) = controller.drag_overlay().expect("drag in flight");
    assert!(preview.tint().is_some());

    controller.finish_active_drag(info_bounds().center());
    assert!(controller.ui.details.visible);
    assert_eq!(controller.ui.details.component.as_ref(), Some(&expected));
    // The drop was rejected on purpose, so the deck keeps the entry.
    assert_eq!(controller.entries(), &deck_before[..]);
    assert!(!controller.info_target_visible());
    assert!(controller.handle_visible());
    assert!(controller.ui.dock.dragging_slot.is_none());
}

#[test]
fn non_app_drags_never_reach_the_info_target() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    controller.report_target_bounds(TargetId::Info, info_bounds());
    controller.report_target_bounds(TargetId::Remove, remove_bounds());

    let slot = first_slot_of(controller, false);
    let deck_before = controller.entries().to_vec();

    controller.start_entry_drag(slot, pos2(100.0, 300.0));
    assert!(!controller.info_target_visible());
    assert!(controller.remove_target_visible());

    controller.update_active_drag(info_bounds().center());
    assert_eq!(controller.hovered_target(), None);

    controller.finish_active_drag(info_bounds().center());
    assert!(!controller.ui.details.visible);
    assert_eq!(controller.entries(), &deck_before[..]);
}

#[test]
fn leaving_the_target_clears_the_preview_tint() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    controller.report_target_bounds(TargetId::Info, info_bounds());

    let slot = first_slot_of(controller, true);
    controller.start_entry_drag(slot, pos2(100.0, 300.0));
    controller.update_active_drag(info_bounds().center());
    assert!(controller.drag_overlay().unwrap().1.tint().is_some());

    controller.update_active_drag(pos2(100.0, 300.0));
    assert!(controller.drag_overlay().unwrap().1.tint().is_none());
}

#[test]
fn drag_released_in_the_open_changes_nothing() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    controller.report_target_bounds(TargetId::Info, info_bounds());
    controller.report_target_bounds(TargetId::Remove, remove_bounds());

    let deck_before = controller.entries().to_vec();
    controller.start_entry_drag(0, pos2(100.0, 300.0));
    controller.finish_active_drag(pos2(320.0, 200.0));

    assert_eq!(controller.entries(), &deck_before[..]);
    assert!(!controller.ui.details.visible);
    assert!(controller.ui.dock.dragging_slot.is_none());
}

#[test]
fn cancelled_drags_restore_the_idle_chrome() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;

    controller.start_entry_drag(0, pos2(100.0, 300.0));
    assert!(controller.is_dragging());
    controller.cancel_active_drag();
    assert!(!controller.is_dragging());
    assert!(!controller.remove_target_visible());
    assert!(controller.handle_visible());
}
