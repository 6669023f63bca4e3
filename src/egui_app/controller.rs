//! Deck controller: owns UI state and bridges the drag plumbing to egui.

mod details;
mod drag;
mod search;
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Rect};
use tracing::info;

use crate::apps::{ComponentName, DeckEntry};
use crate::config::{self, DeckConfig, DeviceProfile};
use crate::drag::{DragController, TargetId};
use crate::drop_targets::{HandleView, HostRequests, InfoDropTarget, RemoveDropTarget};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};

/// Maintains deck state and bridges core logic to the egui UI.
pub struct DeckController {
    /// State consumed by the renderer.
    pub ui: UiState,
    entries: Vec<DeckEntry>,
    device: DeviceProfile,
    drag_tint: [u8; 4],
    drag: DragController,
    info_target: Rc<RefCell<InfoDropTarget>>,
    remove_target: Rc<RefCell<RemoveDropTarget>>,
    handle: Rc<RefCell<HandleView>>,
    host: Rc<RefCell<HostRequests>>,
}

impl DeckController {
    /// Create a controller with an empty deck and fully wired drop targets.
    pub fn new() -> Self {
        let host = Rc::new(RefCell::new(HostRequests::default()));
        let handle = Rc::new(RefCell::new(HandleView::default()));
        let info_target = Rc::new(RefCell::new(InfoDropTarget::new(DeviceProfile::default())));
        {
            let mut target = info_target.borrow_mut();
            target.bind_host(Rc::clone(&host));
            target.bind_handle(Rc::clone(&handle));
        }
        let remove_target = Rc::new(RefCell::new(RemoveDropTarget::new(Rc::clone(&host))));

        let mut drag = DragController::default();
        drag.add_drop_target(TargetId::Info, info_target.clone());
        drag.add_drop_target(TargetId::Remove, remove_target.clone());
        drag.add_drag_listener(info_target.clone());
        drag.add_drag_listener(remove_target.clone());

        Self {
            ui: UiState::default(),
            entries: Vec::new(),
            device: DeviceProfile::default(),
            drag_tint: DeckConfig::default().drag_tint,
            drag,
            info_target,
            remove_target,
            handle,
            host,
        }
    }

    /// Load persisted config and apply it to the targets.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let cfg = config::load_or_default()?;
        self.apply_config(cfg);
        Ok(())
    }

    fn apply_config(&mut self, cfg: DeckConfig) {
        let [r, g, b, a] = cfg.drag_tint;
        self.drag_tint = cfg.drag_tint;
        self.device = cfg.device;
        {
            let mut target = self.info_target.borrow_mut();
            target.set_device_profile(cfg.device);
            target.set_drag_tint(Color32::from_rgba_unmultiplied(r, g, b, a));
        }
        self.entries = cfg.entries;
        self.refresh_search();
        info!(entries = self.entries.len(), "Deck configuration loaded");
    }

    /// Dock entries in display order.
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Device profile the shell was configured for.
    pub fn device_profile(&self) -> DeviceProfile {
        self.device
    }

    /// Whether the action bar should draw the info icon this frame.
    pub fn info_target_visible(&self) -> bool {
        self.info_target.borrow().is_visible()
    }

    /// Whether the remove strip should be drawn this frame.
    pub fn remove_target_visible(&self) -> bool {
        self.remove_target.borrow().is_visible()
    }

    /// Whether the search handle should be drawn this frame.
    pub fn handle_visible(&self) -> bool {
        self.handle.borrow().is_visible()
    }

    /// Report where the UI laid a drop target out this frame.
    pub fn report_target_bounds(&mut self, id: TargetId, bounds: Rect) {
        self.drag.set_target_bounds(id, bounds);
    }

    /// Present a deck entry activation.
    pub fn launch_entry(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        let title = entry.title.clone();
        info!("Launch requested: {title}");
        self.set_status(format!("Launching {title}"), StatusTone::Info);
    }

    fn title_for(&self, component: &ComponentName) -> Option<String> {
        self.entries.iter().find_map(|entry| {
            (entry.component() == Some(component)).then(|| entry.title.clone())
        })
    }

    fn snapshot_config(&self) -> DeckConfig {
        DeckConfig {
            drag_tint: self.drag_tint,
            device: self.device,
            entries: self.entries.clone(),
        }
    }

    fn persist_config(&mut self, error_prefix: &str) {
        if let Err(err) = config::save(&self.snapshot_config()) {
            self.set_status(format!("{error_prefix}: {err}"), StatusTone::Error);
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label.into();
        self.ui.status.badge_color = color;
    }
}

impl Default for DeckController {
    fn default() -> Self {
        Self::new()
    }
}
