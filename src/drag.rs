//! Drag-and-drop plumbing for the shell.
//!
//! The [`DragController`] owns the drag in flight and dispatches lifecycle
//! callbacks to registered [`DropTarget`]s and [`DragListener`]s. The UI pass
//! reports where each target was laid out every frame; hit testing runs
//! against those bounds after each target expanded them via
//! [`DropTarget::hit_rect`].

mod controller;
mod preview;

pub use controller::{ActiveDrag, DragController, DropOutcome};
pub use preview::DragPreview;

use egui::{Pos2, Rect};

use crate::apps::DeckItem;

/// Identifies a registered drop target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetId {
    /// App-info icon in the action bar.
    Info,
    /// Remove strip shown under the dock while dragging.
    Remove,
}

/// Receives drop-related callbacks for one screen region.
pub trait DropTarget {
    /// Decide whether a drop at `pos` should land here.
    ///
    /// Runs just before [`DropTarget::on_drop`]; returning false rejects the
    /// drop and leaves the dragged item with its origin.
    fn accept_drop(&mut self, item: &DeckItem, pos: Pos2) -> bool;

    /// Perform the drop after it was accepted.
    fn on_drop(&mut self, item: &DeckItem, pos: Pos2);

    /// The pointer entered this target's hit region.
    fn on_drag_enter(&mut self, item: &DeckItem, preview: &mut DragPreview);

    /// The pointer moved inside the hit region.
    fn on_drag_over(&mut self, item: &DeckItem, pos: Pos2);

    /// The pointer left the hit region.
    fn on_drag_exit(&mut self, item: &DeckItem, preview: &mut DragPreview);

    /// Whether this target currently takes part in hit testing.
    fn is_drop_enabled(&self) -> bool;

    /// Region that reacts to drops, derived from the laid-out bounds.
    fn hit_rect(&self, bounds: Rect) -> Rect {
        bounds
    }
}

/// Observes drag lifecycle edges independent of pointer position.
pub trait DragListener {
    /// A drag began with the given descriptor.
    fn on_drag_start(&mut self, item: &DeckItem);

    /// The drag finished, dropped or not.
    fn on_drag_end(&mut self);
}
