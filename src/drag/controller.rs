use std::cell::RefCell;
use std::rc::Rc;

use egui::{Pos2, Rect};
use tracing::{debug, info};

use crate::apps::DeckItem;

use super::{DragListener, DragPreview, DropTarget, TargetId};

/// The drag in flight.
#[derive(Clone, Debug)]
pub struct ActiveDrag {
    /// Descriptor of the dragged item.
    pub item: DeckItem,
    /// Floating preview tile.
    pub preview: DragPreview,
    /// Last reported pointer position.
    pub pos: Pos2,
    /// Deck slot the drag started from, when it came from the deck.
    pub origin_slot: Option<usize>,
}

/// How a finished drag ended.
#[derive(Clone, Debug)]
pub struct DropOutcome {
    /// The dragged descriptor.
    pub item: DeckItem,
    /// Deck slot the drag started from.
    pub origin_slot: Option<usize>,
    /// Target under the pointer at release, if any.
    pub target: Option<TargetId>,
    /// True when that target accepted (consumed) the drop.
    pub accepted: bool,
}

struct TargetSlot {
    id: TargetId,
    handler: Rc<RefCell<dyn DropTarget>>,
    bounds: Option<Rect>,
}

/// Owns the drag in flight and dispatches lifecycle callbacks.
#[derive(Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
    targets: Vec<TargetSlot>,
    listeners: Vec<Rc<RefCell<dyn DragListener>>>,
    hovered: Option<TargetId>,
}

impl DragController {
    /// Register a drop target. Registration order doubles as hit-test
    /// priority when regions overlap.
    pub fn add_drop_target(&mut self, id: TargetId, handler: Rc<RefCell<dyn DropTarget>>) {
        self.targets.push(TargetSlot {
            id,
            handler,
            bounds: None,
        });
    }

    /// Register a lifecycle listener.
    pub fn add_drag_listener(&mut self, listener: Rc<RefCell<dyn DragListener>>) {
        self.listeners.push(listener);
    }

    /// Record where the UI laid a target out this frame.
    pub fn set_target_bounds(&mut self, id: TargetId, bounds: Rect) {
        if let Some(slot) = self.targets.iter_mut().find(|slot| slot.id == id) {
            slot.bounds = Some(bounds);
        }
    }

    /// True while a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The drag in flight, if any.
    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Target currently under the pointer, if any.
    pub fn hovered(&self) -> Option<TargetId> {
        self.hovered
    }

    /// Begin a drag and notify listeners.
    pub fn start_drag(
        &mut self,
        item: DeckItem,
        preview: DragPreview,
        pos: Pos2,
        origin_slot: Option<usize>,
    ) {
        info!("Drag started: {}", item.title());
        self.hovered = None;
        for listener in &self.listeners {
            listener.borrow_mut().on_drag_start(&item);
        }
        self.active = Some(ActiveDrag {
            item,
            preview,
            pos,
            origin_slot,
        });
    }

    /// Track pointer movement, dispatching enter/over/exit transitions.
    pub fn drag_moved(&mut self, pos: Pos2) {
        let Some(drag) = self.active.as_mut() else {
            return;
        };
        drag.pos = pos;
        let hit = hit_target(&self.targets, pos);
        if hit == self.hovered {
            if let Some(slot) = hit.and_then(|id| slot_of(&self.targets, id)) {
                slot.handler.borrow_mut().on_drag_over(&drag.item, pos);
            }
            return;
        }
        if let Some(slot) = self.hovered.and_then(|id| slot_of(&self.targets, id)) {
            slot.handler
                .borrow_mut()
                .on_drag_exit(&drag.item, &mut drag.preview);
        }
        if let Some(slot) = hit.and_then(|id| slot_of(&self.targets, id)) {
            slot.handler
                .borrow_mut()
                .on_drag_enter(&drag.item, &mut drag.preview);
        }
        debug!(hovered = ?hit, "drag hover changed");
        self.hovered = hit;
    }

    /// Finish the drag with a drop attempt at `pos`.
    ///
    /// `accept_drop` runs on the hovered target just before `on_drop`; a
    /// rejected drop leaves the item with its origin.
    pub fn drop_at(&mut self, pos: Pos2) -> Option<DropOutcome> {
        self.drag_moved(pos);
        let mut drag = self.active.take()?;
        let target = self.hovered.take();
        let mut accepted = false;
        if let Some(slot) = target.and_then(|id| slot_of(&self.targets, id)) {
            let mut handler = slot.handler.borrow_mut();
            handler.on_drag_exit(&drag.item, &mut drag.preview);
            if handler.accept_drop(&drag.item, pos) {
                handler.on_drop(&drag.item, pos);
                accepted = true;
            }
        }
        self.notify_drag_end();
        info!(drop_target = ?target, accepted, "Drag finished: {}", drag.item.title());
        Some(DropOutcome {
            item: drag.item,
            origin_slot: drag.origin_slot,
            target,
            accepted,
        })
    }

    /// Abort the drag without a drop.
    pub fn cancel_drag(&mut self) -> Option<DropOutcome> {
        let mut drag = self.active.take()?;
        if let Some(slot) = self.hovered.take().and_then(|id| slot_of(&self.targets, id)) {
            slot.handler
                .borrow_mut()
                .on_drag_exit(&drag.item, &mut drag.preview);
        }
        self.notify_drag_end();
        debug!("Drag cancelled: {}", drag.item.title());
        Some(DropOutcome {
            item: drag.item,
            origin_slot: drag.origin_slot,
            target: None,
            accepted: false,
        })
    }

    fn notify_drag_end(&mut self) {
        for listener in &self.listeners {
            listener.borrow_mut().on_drag_end();
        }
    }
}

fn hit_target(targets: &[TargetSlot], pos: Pos2) -> Option<TargetId> {
    targets.iter().find_map(|slot| {
        let bounds = slot.bounds?;
        let handler = slot.handler.borrow();
        (handler.is_drop_enabled() && handler.hit_rect(bounds).contains(pos)).then_some(slot.id)
    })
}

fn slot_of(targets: &[TargetSlot], id: TargetId) -> Option<&TargetSlot> {
    targets.iter().find(|slot| slot.id == id)
}
