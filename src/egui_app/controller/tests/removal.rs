use egui::{Rect, pos2, vec2};

use super::super::test_support::dummy_controller;
use crate::config;
use crate::drag::TargetId;

#[test]
fn dropping_on_the_remove_strip_takes_the_entry_off_the_deck() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    let strip = Rect::from_min_size(pos2(0.0, 440.0), vec2(640.0, 36.0));
    controller.report_target_bounds(TargetId::Remove, strip);

    let removed_title = controller.entries()[1].title.clone();
    let len_before = controller.entries().len();

    controller.start_entry_drag(1, pos2(120.0, 300.0));
    controller.update_active_drag(strip.center());
    controller.finish_active_drag(strip.center());

    assert_eq!(controller.entries().len(), len_before - 1);
    assert!(
        controller
            .entries()
            .iter()
            .all(|entry| entry.title != removed_title)
    );
    assert!(controller.ui.status.text.contains(&removed_title));

    // The change is persisted: a fresh load sees the smaller deck.
    let reloaded = config::load_or_default().unwrap();
    assert_eq!(reloaded.entries, controller.entries());
}
