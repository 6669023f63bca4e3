mod details;
mod drag_flow;
mod removal;

use super::test_support::dummy_controller;
use crate::egui_app::ui::style::StatusTone;

#[test]
fn default_configuration_populates_the_deck() {
    let mut harness = dummy_controller();
    assert!(!harness.controller.entries().is_empty());
    assert_eq!(
        harness.controller.ui.search.matches.len(),
        harness.controller.entries().len()
    );
    // Nothing to drag yet, so neither target is on screen.
    assert!(!harness.controller.info_target_visible());
    assert!(!harness.controller.remove_target_visible());
    assert!(harness.controller.handle_visible());
    harness.controller.set_status("ready", StatusTone::Idle);
    assert_eq!(harness.controller.ui.status.text, "ready");
}

#[test]
fn launching_an_entry_updates_the_status_line() {
    let mut harness = dummy_controller();
    let title = harness.controller.entries()[0].title.clone();
    harness.controller.launch_entry(0);
    assert!(harness.controller.ui.status.text.contains(&title));
}
