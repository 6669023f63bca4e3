use eframe::egui::{self, Align2, Color32, FontId, Rect, RichText, Sense, Stroke, StrokeKind};

use super::{DeckApp, style};
use crate::apps::DeckEntry;
use crate::drag::TargetId;

impl DeckApp {
    pub(super) fn render_dock(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Home")
                        .color(Color32::from_gray(120))
                        .small(),
                );
            });
            ui.add_space(24.0);

            let entries = self.controller.entries().to_vec();
            let lifted = self.controller.ui.dock.dragging_slot;
            ui.horizontal_wrapped(|ui| {
                ui.add_space(16.0);
                for (slot, entry) in entries.iter().enumerate() {
                    let response = deck_tile(ui, entry, lifted == Some(slot));
                    if response.drag_started() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            self.controller.start_entry_drag(slot, pos);
                        }
                    } else if response.clicked() {
                        self.controller.launch_entry(slot);
                    }
                }
            });
        });
    }

    /// Strip under the dock that swallows drags to remove entries. Only laid
    /// out while a drag is in flight.
    pub(super) fn render_remove_bar(&mut self, ctx: &egui::Context) {
        if !self.controller.remove_target_visible() {
            return;
        }
        egui::TopBottomPanel::bottom("remove_bar")
            .frame(egui::Frame::new().fill(style::PANEL_FILL))
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let width = ui.available_width();
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(width, 36.0), Sense::hover());
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    Stroke::new(1.0, style::REMOVE_ACCENT),
                    StrokeKind::Inside,
                );
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Remove",
                    FontId::proportional(14.0),
                    style::REMOVE_ACCENT,
                );
                self.controller.report_target_bounds(TargetId::Remove, rect);
                ui.add_space(4.0);
            });
    }
}

fn deck_tile(ui: &mut egui::Ui, entry: &DeckEntry, lifted: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(76.0, 88.0), Sense::click_and_drag());
    let [r, g, b] = entry.accent;
    let mut fill = Color32::from_rgb(r, g, b);
    if lifted {
        fill = fill.gamma_multiply(0.35);
    }
    let tile = Rect::from_center_size(
        egui::pos2(rect.center().x, rect.min.y + 28.0),
        egui::vec2(48.0, 48.0),
    );
    ui.painter().rect_filled(tile, 10.0, fill);
    ui.painter().text(
        tile.center(),
        Align2::CENTER_CENTER,
        &entry.glyph,
        FontId::proportional(22.0),
        Color32::WHITE,
    );
    let label = if lifted {
        Color32::from_gray(90)
    } else {
        Color32::from_gray(200)
    };
    ui.painter().text(
        egui::pos2(rect.center().x, rect.max.y - 14.0),
        Align2::CENTER_CENTER,
        &entry.title,
        FontId::proportional(12.0),
        label,
    );
    response
}
