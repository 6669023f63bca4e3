//! Shared colors for the deck UI.

use egui::Color32;

/// Background of the central panel.
pub const PANEL_FILL: Color32 = Color32::from_rgb(16, 16, 16);

/// Background of the action bar.
pub const BAR_FILL: Color32 = Color32::from_rgb(24, 24, 24);

/// Fill of the info icon tile.
pub const INFO_FILL: Color32 = Color32::from_rgb(31, 139, 255);

/// Accent of the remove strip.
pub const REMOVE_ACCENT: Color32 = Color32::from_rgb(192, 57, 43);

/// Tone of a status-bar message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Nothing happening.
    Idle,
    /// Neutral progress or confirmation.
    Info,
    /// Something surprising but recoverable.
    Warning,
    /// Something failed.
    Error,
}

/// Badge label and color for a tone.
pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    match tone {
        StatusTone::Idle => ("Idle", Color32::from_rgb(42, 42, 42)),
        StatusTone::Info => ("Info", Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning", Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error", Color32::from_rgb(192, 57, 43)),
    }
}
