use tracing::{info, warn};

use super::DeckController;
use crate::apps::ComponentName;
use crate::egui_app::ui::style::StatusTone;

impl DeckController {
    /// Open the in-app details screen for `component`.
    ///
    /// `None` means the dropped item carried no application identity; the
    /// panel still opens in its unknown-application form because the drop
    /// target forwards every drop to the host.
    pub fn open_application_details(&mut self, component: Option<ComponentName>) {
        match &component {
            Some(component) => {
                info!("Opening application details for {component}");
                self.ui.details.title = self.title_for(component);
                self.set_status(format!("Details for {component}"), StatusTone::Info);
            }
            None => {
                warn!("Details requested for an item with no component");
                self.ui.details.title = None;
                self.set_status(
                    "That item does not identify an application",
                    StatusTone::Warning,
                );
            }
        }
        self.ui.details.component = component;
        self.ui.details.visible = true;
    }

    /// Close the details screen.
    pub fn close_details(&mut self) {
        self.ui.details.visible = false;
    }
}
