use egui::{Color32, Pos2};
use tracing::{debug, warn};

use super::DeckController;
use crate::apps::{DeckEntry, DeckItem};
use crate::drag::{DragPreview, TargetId};
use crate::drop_targets::HostRequest;
use crate::egui_app::ui::style::StatusTone;

impl DeckController {
    /// Begin dragging the deck entry at `slot`.
    pub fn start_entry_drag(&mut self, slot: usize, pos: Pos2) {
        let Some(entry) = self.entries.get(slot) else {
            return;
        };
        let preview = preview_for(entry);
        let item = entry.item();
        debug!(slot, "deck drag started: {}", entry.title);
        self.ui.dock.dragging_slot = Some(slot);
        self.drag.start_drag(item, preview, pos, Some(slot));
    }

    /// Update pointer position for the drag in flight.
    pub fn update_active_drag(&mut self, pos: Pos2) {
        self.drag.drag_moved(pos);
    }

    /// True while a deck drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Drop target currently under the pointer, if any.
    pub fn hovered_target(&self) -> Option<TargetId> {
        self.drag.hovered()
    }

    /// Overlay geometry for the drag preview while a drag is in flight.
    pub fn drag_overlay(&self) -> Option<(Pos2, &DragPreview)> {
        self.drag.active().map(|drag| (drag.pos, &drag.preview))
    }

    /// Release the drag with a drop at `pos`.
    pub fn finish_active_drag(&mut self, pos: Pos2) {
        let Some(outcome) = self.drag.drop_at(pos) else {
            return;
        };
        self.ui.dock.dragging_slot = None;
        if outcome.target.is_none() {
            debug!("drag released clear of any target");
        }
        self.apply_host_requests();
    }

    /// Abort the drag in flight, leaving the deck unchanged.
    pub fn cancel_active_drag(&mut self) {
        if self.drag.cancel_drag().is_some() {
            self.ui.dock.dragging_slot = None;
        }
    }

    /// Drain actions the drop targets asked the host to perform.
    pub(super) fn apply_host_requests(&mut self) {
        loop {
            let request = self.host.borrow_mut().pop();
            let Some(request) = request else {
                break;
            };
            match request {
                HostRequest::OpenDetails(component) => self.open_application_details(component),
                HostRequest::RemoveItem(item) => self.remove_deck_item(&item),
            }
        }
    }

    fn remove_deck_item(&mut self, item: &DeckItem) {
        let Some(index) = self.entries.iter().position(|entry| entry.matches_item(item)) else {
            warn!("Remove requested for an item not on the deck: {}", item.title());
            return;
        };
        let removed = self.entries.remove(index);
        self.refresh_search();
        self.set_status(format!("Removed {}", removed.title), StatusTone::Info);
        self.persist_config("Failed to save deck after removing an entry");
    }
}

fn preview_for(entry: &DeckEntry) -> DragPreview {
    let [r, g, b] = entry.accent;
    DragPreview::new(
        entry.glyph.clone(),
        entry.title.clone(),
        Color32::from_rgb(r, g, b),
    )
}
