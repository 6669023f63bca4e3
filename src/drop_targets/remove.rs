use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Pos2};

use crate::apps::DeckItem;
use crate::drag::{DragListener, DragPreview, DropTarget};

use super::HostRequests;

/// Strip under the dock that takes entries off the deck.
///
/// Unlike the info target it accepts the drop: a consumed drop is what
/// removes the icon from its origin slot. Every item kind can be removed, so
/// the strip activates for all drags.
pub struct RemoveDropTarget {
    active: bool,
    visible: bool,
    tint: Color32,
    host: Rc<RefCell<HostRequests>>,
}

impl RemoveDropTarget {
    /// Create a hidden remove strip wired to `host`.
    pub fn new(host: Rc<RefCell<HostRequests>>) -> Self {
        Self {
            active: false,
            visible: false,
            tint: Color32::from_rgba_unmultiplied(192, 57, 43, 120),
            host,
        }
    }

    /// Whether the dock should draw the strip this frame.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Color overlaid on the preview while hovering the strip.
    pub fn set_drag_tint(&mut self, tint: Color32) {
        self.tint = tint;
    }
}

impl DropTarget for RemoveDropTarget {
    fn accept_drop(&mut self, _item: &DeckItem, _pos: Pos2) -> bool {
        self.visible
    }

    fn on_drop(&mut self, item: &DeckItem, _pos: Pos2) {
        self.host.borrow_mut().remove_item(item);
    }

    fn on_drag_enter(&mut self, _item: &DeckItem, preview: &mut DragPreview) {
        preview.set_tint(Some(self.tint));
    }

    fn on_drag_over(&mut self, _item: &DeckItem, _pos: Pos2) {}

    fn on_drag_exit(&mut self, _item: &DeckItem, preview: &mut DragPreview) {
        preview.set_tint(None);
    }

    fn is_drop_enabled(&self) -> bool {
        self.active
    }
}

impl DragListener for RemoveDropTarget {
    fn on_drag_start(&mut self, _item: &DeckItem) {
        self.active = true;
        self.visible = true;
    }

    fn on_drag_end(&mut self) {
        self.active = false;
        self.visible = false;
    }
}
