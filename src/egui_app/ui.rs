//! egui renderer for the deck.

pub mod style;

mod action_bar;
mod details_panel;
mod dock_panel;
mod drag_overlay;
mod search_overlay;

use eframe::egui;

use crate::egui_app::controller::DeckController;

/// Minimum window size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 360.0);

/// Renders the egui UI using the shared controller state.
pub struct DeckApp {
    controller: DeckController,
    visuals_set: bool,
}

impl DeckApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = DeckController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = style::PANEL_FILL;
        visuals.panel_fill = style::PANEL_FILL;
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(&status.badge_label).color(egui::Color32::WHITE));
                    ui.separator();
                    ui.label(egui::RichText::new(&status.text).color(egui::Color32::WHITE));
                });
            });
    }

    /// Feed pointer state into the drag controller and settle releases.
    fn drive_drag(&mut self, ctx: &egui::Context) {
        if !self.controller.is_dragging() {
            return;
        }
        let pointer = ctx.input(|i| i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()));
        let released = ctx.input(|i| i.pointer.any_released());
        let held = ctx.input(|i| i.pointer.primary_down());
        match pointer {
            Some(pos) => {
                self.controller.update_active_drag(pos);
                if released {
                    self.controller.finish_active_drag(pos);
                } else if !held {
                    // Safety net to clear drag visuals if a release was missed.
                    self.controller.cancel_active_drag();
                }
            }
            None => {
                if released || !held {
                    self.controller.cancel_active_drag();
                }
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_action_bar(ctx);
        self.render_status(ctx);
        self.render_remove_bar(ctx);
        self.render_dock(ctx);
        self.render_search_overlay(ctx);
        self.render_details_panel(ctx);
        self.drive_drag(ctx);
        self.render_drag_overlay(ctx);
        ctx.request_repaint();
    }
}
