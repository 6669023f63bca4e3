use tempfile::TempDir;

use super::DeckController;
use crate::app_dirs::ConfigBaseGuard;
use crate::apps::{ComponentName, DeckEntry, DeckEntryKind};

/// Controller plus the scoped environment its config lives in.
pub(super) struct ControllerHarness {
    pub controller: DeckController,
    _config: ConfigBaseGuard,
    _temp: TempDir,
}

/// Controller with the default deck, isolated under a temp config home.
pub(super) fn dummy_controller() -> ControllerHarness {
    let temp = tempfile::tempdir().expect("create tempdir");
    let guard = ConfigBaseGuard::set(temp.path().to_path_buf());
    let mut controller = DeckController::new();
    controller
        .load_configuration()
        .expect("load default configuration");
    ControllerHarness {
        controller,
        _config: guard,
        _temp: temp,
    }
}

pub(super) fn app_entry(title: &str, package: &str, class: &str) -> DeckEntry {
    DeckEntry {
        title: title.into(),
        glyph: "●".into(),
        accent: [96, 176, 255],
        kind: DeckEntryKind::App {
            component: ComponentName::new(package, class),
        },
    }
}

/// Index of the first entry of the given kind in the default deck.
pub(super) fn first_slot_of(controller: &DeckController, want_app: bool) -> usize {
    controller
        .entries()
        .iter()
        .position(|entry| matches!(entry.kind, DeckEntryKind::App { .. }) == want_app)
        .expect("default deck carries both app and non-app entries")
}
