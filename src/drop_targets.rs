//! Concrete drop targets and the collaborators they are wired to.

mod info;
mod remove;

pub use info::InfoDropTarget;
pub use remove::RemoveDropTarget;

use std::collections::VecDeque;

use tracing::debug;

use crate::apps::{ComponentName, DeckItem};

/// Companion view the info target appears in the place of.
///
/// While a drag is active the action bar swaps the handle out for the info
/// icon; the handle keeps its slot so the bar does not reflow.
#[derive(Clone, Debug)]
pub struct HandleView {
    visible: bool,
}

impl Default for HandleView {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl HandleView {
    /// Whether the handle is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the handle.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Actions drop targets ask the host to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum HostRequest {
    /// Open the details screen for an application. `None` means the dropped
    /// item did not identify one.
    OpenDetails(Option<ComponentName>),
    /// Take the item off the deck.
    RemoveItem(DeckItem),
}

/// Host-controller boundary: a queue of requested actions.
///
/// Targets push into it during drop handling; the deck controller drains it
/// once per frame and performs the side effects.
#[derive(Debug, Default)]
pub struct HostRequests {
    queue: VecDeque<HostRequest>,
}

impl HostRequests {
    /// Ask the host to open the details screen for `component`.
    pub fn open_application_details(&mut self, component: Option<&ComponentName>) {
        debug!(?component, "details screen requested");
        self.queue.push_back(HostRequest::OpenDetails(component.cloned()));
    }

    /// Ask the host to remove `item` from the deck.
    pub fn remove_item(&mut self, item: &DeckItem) {
        debug!("removal requested: {}", item.title());
        self.queue.push_back(HostRequest::RemoveItem(item.clone()));
    }

    /// Pop the oldest pending request.
    pub fn pop(&mut self) -> Option<HostRequest> {
        self.queue.pop_front()
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
