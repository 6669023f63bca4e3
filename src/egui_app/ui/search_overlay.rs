use eframe::egui::{self, Align2};

use super::DeckApp;

impl DeckApp {
    pub(super) fn render_search_overlay(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.search.open {
            return;
        }
        egui::Window::new("Search apps")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .show(ctx, |ui| {
                let mut query = self.controller.ui.search.query.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Type to filter the deck")
                        .desired_width(240.0),
                );
                response.request_focus();
                self.controller.set_search_query(query);

                ui.separator();
                let matches = self.controller.ui.search.matches.clone();
                for (hit, &index) in matches.iter().enumerate() {
                    let Some(entry) = self.controller.entries().get(index) else {
                        continue;
                    };
                    let title = entry.title.clone();
                    if ui.selectable_label(false, title).clicked() {
                        self.controller.launch_search_hit(hit);
                    }
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.controller.toggle_search();
                }
            });
    }
}
