//! Upload and scanning steps.

use super::UiApp;
use eframe::egui;
use recycle_core::{FlowError, ImagePayload};
use rfd::FileDialog;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

impl UiApp {
    pub(super) fn render_upload_panel(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading("Is it recyclable?");
            ui.label("Take or choose a photo of an item to find out how to dispose of it.");
            ui.add_space(12.0);
            if ui.button("Choose photo...").clicked()
                && let Some(path) = FileDialog::new()
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file()
            {
                match ImagePayload::from_path(&path, self.max_upload_bytes) {
                    Ok(image) => self.start_scan(ctx, image),
                    Err(err) => self.report_failure(FlowError::from(err)),
                }
            }
        });
    }

    pub(super) fn render_scanning_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            self.paint_preview(ui);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.spinner();
                let name = self.flow.image().map(|i| i.file_name.as_str()).unwrap_or("photo");
                ui.label(format!("Analyzing {name}..."));
            });
        });
    }
}
