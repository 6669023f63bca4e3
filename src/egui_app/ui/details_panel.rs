use eframe::egui::{self, Align2, RichText, Vec2};

use super::DeckApp;

impl DeckApp {
    /// In-app stand-in for the platform's application details screen.
    pub(super) fn render_details_panel(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.details.visible {
            return;
        }
        let details = self.controller.ui.details.clone();
        let mut open = true;
        egui::Window::new("Application details")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                match &details.component {
                    Some(component) => {
                        if let Some(title) = &details.title {
                            ui.heading(title);
                        }
                        egui::Grid::new("details_grid").num_columns(2).show(ui, |ui| {
                            ui.label("Package");
                            ui.monospace(&component.package);
                            ui.end_row();
                            ui.label("Class");
                            ui.monospace(&component.class);
                            ui.end_row();
                        });
                    }
                    None => {
                        ui.heading("Unknown application");
                        ui.label("The dropped item did not identify an application.");
                    }
                }
                ui.add_space(8.0);
                if ui.button(RichText::new("Close")).clicked() {
                    self.controller.close_details();
                }
            });
        if !open {
            self.controller.close_details();
        }
    }
}
