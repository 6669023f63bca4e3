use egui::Color32;

/// Visual stand-in for the item while it is being dragged.
///
/// Targets may overlay a tint while the preview hovers over them; the
/// overlay is cleared again when the pointer leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPreview {
    /// Glyph drawn on the floating tile.
    pub glyph: String,
    /// Label shown next to the tile.
    pub label: String,
    /// Base tile color.
    pub accent: Color32,
    tint: Option<Color32>,
}

impl DragPreview {
    /// Preview for a deck tile.
    pub fn new(glyph: impl Into<String>, label: impl Into<String>, accent: Color32) -> Self {
        Self {
            glyph: glyph.into(),
            label: label.into(),
            accent,
            tint: None,
        }
    }

    /// Overlay color currently applied by a hovering target.
    pub fn tint(&self) -> Option<Color32> {
        self.tint
    }

    /// Set or clear the hover overlay.
    pub fn set_tint(&mut self, tint: Option<Color32>) {
        self.tint = tint;
    }
}
