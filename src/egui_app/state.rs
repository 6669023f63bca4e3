//! Shared state types for the egui UI.

use egui::Color32;

use crate::apps::ComponentName;
use crate::egui_app::ui::style;

/// Top-level UI model consumed by the renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Footer status line.
    pub status: StatusBarState,
    /// Dock row state.
    pub dock: DockState,
    /// In-app application details screen.
    pub details: DetailsPanelState,
    /// App search overlay opened from the handle.
    pub search: SearchState,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Message text.
    pub text: String,
    /// Short badge label next to the message.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl Default for StatusBarState {
    fn default() -> Self {
        let (label, color) = style::status_badge(style::StatusTone::Idle);
        Self {
            text: "Drag an app icon up to inspect it, or down to remove it".into(),
            badge_label: label.into(),
            badge_color: color,
        }
    }
}

/// Dock row state.
#[derive(Clone, Debug, Default)]
pub struct DockState {
    /// Slot currently lifted by a drag, rendered dimmed.
    pub dragging_slot: Option<usize>,
}

/// The in-app application details screen.
#[derive(Clone, Debug, Default)]
pub struct DetailsPanelState {
    /// Whether the panel is open.
    pub visible: bool,
    /// Component the panel describes; `None` renders the unknown-app form.
    pub component: Option<ComponentName>,
    /// Title of the deck entry the component was resolved from, when known.
    pub title: Option<String>,
}

/// App search overlay state.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Whether the overlay is open.
    pub open: bool,
    /// Current query text.
    pub query: String,
    /// Indices into the deck entries, best match first.
    pub matches: Vec<usize>,
}
