#![deny(missing_docs)]

//! Entry point for the appdeck launcher shell.

use appdeck::egui_app::ui::{DeckApp, MIN_VIEWPORT_SIZE};
use appdeck::logging;
use eframe::egui;
use egui::viewport::IconData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(880.0, 520.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "appdeck",
        native_options,
        Box::new(|_cc| match DeckApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

fn load_app_icon() -> Option<IconData> {
    let icon = decode_icon(include_bytes!("../assets/icon.png"));
    if icon.is_none() {
        eprintln!("Failed to decode the embedded window icon.");
    }
    icon
}

/// Convert raw embedded bytes into icon-friendly RGBA data.
fn decode_icon(bytes: &[u8]) -> Option<IconData> {
    let image = image::load_from_memory(bytes).ok()?.to_rgba8();
    let (width, height) = image.dimensions();
    Some(IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start appdeck");
                ui.label(&self.message);
            });
        });
    }
}
