use super::super::test_support::{app_entry, dummy_controller};
use crate::apps::ComponentName;
use crate::config::DeckConfig;

#[test]
fn known_components_resolve_their_deck_title() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    let mut cfg = DeckConfig::default();
    cfg.entries.push(app_entry("Notes", "org.example.notes", "PadActivity"));
    controller.apply_config(cfg);

    controller.open_application_details(Some(ComponentName::new(
        "org.example.notes",
        "PadActivity",
    )));
    assert!(controller.ui.details.visible);
    assert_eq!(controller.ui.details.title.as_deref(), Some("Notes"));
}

#[test]
fn unknown_components_open_without_a_title() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    controller.open_application_details(Some(ComponentName::new("org.example.gone", "Main")));
    assert!(controller.ui.details.visible);
    assert_eq!(controller.ui.details.title, None);
}

#[test]
fn missing_component_opens_the_unknown_application_form() {
    let mut harness = dummy_controller();
    let controller = &mut harness.controller;
    controller.open_application_details(None);
    assert!(controller.ui.details.visible);
    assert_eq!(controller.ui.details.component, None);
    assert_eq!(controller.ui.status.badge_label, "Warning");

    controller.close_details();
    assert!(!controller.ui.details.visible);
}
