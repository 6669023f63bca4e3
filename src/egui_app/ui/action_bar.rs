use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense};

use super::{DeckApp, style};
use crate::drag::TargetId;

impl DeckApp {
    pub(super) fn render_action_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("action_bar")
            .frame(egui::Frame::new().fill(style::BAR_FILL))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("appdeck").color(Color32::WHITE).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(8.0);
                        // The info icon takes over the handle's slot while an
                        // application drag is active.
                        if self.controller.info_target_visible() {
                            let response = info_icon(ui);
                            self.controller
                                .report_target_bounds(TargetId::Info, response.rect);
                        } else {
                            let visible = self.controller.handle_visible();
                            let handle = ui.add_visible(
                                visible,
                                egui::Button::new(RichText::new("🔍").color(Color32::WHITE)),
                            );
                            if handle.clicked() {
                                self.controller.toggle_search();
                            }
                        }
                    });
                });
            });
    }
}

fn info_icon(ui: &mut egui::Ui) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(28.0, 22.0), Sense::hover());
    ui.painter().rect_filled(rect, 4.0, style::INFO_FILL);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        "ℹ",
        FontId::proportional(15.0),
        Color32::WHITE,
    );
    response
}
