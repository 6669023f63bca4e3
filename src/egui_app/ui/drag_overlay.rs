use eframe::egui::{self, Align2, Area, Color32, FontId, Frame, Order, RichText, Sense, Stroke, Vec2};

use super::DeckApp;

impl DeckApp {
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        let Some((pos, preview)) = self
            .controller
            .drag_overlay()
            .map(|(pos, preview)| (pos, preview.clone()))
        else {
            return;
        };
        Area::new("drag_preview".into())
            .order(Order::Tooltip)
            .pivot(Align2::CENTER_CENTER)
            .current_pos(pos + Vec2::new(16.0, 16.0))
            .show(ctx, |ui| {
                Frame::new()
                    .fill(Color32::from_rgba_unmultiplied(26, 39, 51, 220))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(47, 111, 177)))
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.add_space(8.0);
                            let (tile, _) =
                                ui.allocate_exact_size(egui::vec2(22.0, 22.0), Sense::hover());
                            ui.painter().rect_filled(tile, 5.0, preview.accent);
                            ui.painter().text(
                                tile.center(),
                                Align2::CENTER_CENTER,
                                &preview.glyph,
                                FontId::proportional(13.0),
                                Color32::WHITE,
                            );
                            if let Some(tint) = preview.tint() {
                                // Overlay the filter a hovering target applied.
                                ui.painter().rect_filled(tile, 5.0, tint);
                            }
                            ui.label(RichText::new(&preview.label).color(Color32::WHITE));
                            ui.add_space(8.0);
                        });
                    });
            });
    }
}
