//! Three-step scanner UI: pick a photo, wait for the service, read the verdict.

mod preference;
mod results;
mod upload;

use anyhow::{Context, Result};
use eframe::{App, CreationContext, Frame, egui};
use preference::SystemPreference;
use recycle_core::{
    AppConfig, Classifier, FlowError, FlowStep, HttpClassifier, ImagePayload, RawPrediction,
    ScanError, ScanFlow, Theme,
};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

const PREVIEW_SIZE: u32 = 320;

type Outcome = Result<RawPrediction, ScanError>;

pub struct UiApp {
    flow: ScanFlow,
    classifier: Arc<dyn Classifier>,
    max_upload_bytes: u64,
    preview: Option<egui::TextureHandle>,
    pending: Option<Receiver<Outcome>>,
    app_version: &'static str,
}

impl UiApp {
    pub fn new(cc: &CreationContext<'_>, config: &AppConfig) -> Result<Self> {
        let classifier = HttpClassifier::new(&config.client)
            .context("classification client could not be created")?;
        tracing::info!("Classification endpoint: {}", classifier.endpoint());

        let flow = ScanFlow::new(&SystemPreference::query(&cc.egui_ctx));
        apply_theme(&cc.egui_ctx, flow.theme());

        Ok(Self {
            flow,
            classifier: Arc::new(classifier),
            max_upload_bytes: config.client.max_upload_bytes,
            preview: None,
            pending: None,
            app_version: env!("RECYCLE_SCAN_VERSION"),
        })
    }

    fn start_scan(&mut self, ctx: &egui::Context, image: ImagePayload) {
        let preview = self.load_preview(ctx, &image);
        let job = match self.flow.begin_scan(image) {
            Ok(image) => image.clone(),
            Err(err) => {
                self.report_failure(err);
                return;
            }
        };
        self.preview = preview;

        let (tx, rx) = mpsc::channel();
        let classifier = Arc::clone(&self.classifier);
        let repaint = ctx.clone();
        thread::spawn(move || {
            let outcome = classifier.classify(&job);
            let _ = tx.send(outcome);
            repaint.request_repaint();
        });
        self.pending = Some(rx);
    }

    fn poll_pending(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.pending else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
                return;
            }
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.report_failure(FlowError::WorkerLost);
                return;
            }
        };
        self.pending = None;
        if let Err(err) = self.flow.finish_scan(outcome) {
            self.report_failure(err);
        }
    }

    /// Blocking alert, then back to the upload step.
    fn report_failure(&mut self, err: FlowError) {
        tracing::warn!("Scan failed: {err}");
        self.reset();
        show_alert(err.user_message());
    }

    fn reset(&mut self) {
        self.flow.reset();
        self.preview = None;
    }

    fn load_preview(&self, ctx: &egui::Context, image: &ImagePayload) -> Option<egui::TextureHandle> {
        match image.preview(PREVIEW_SIZE) {
            Ok(thumb) => {
                let (w, h) = thumb.dimensions();
                let size = [w as usize, h as usize];
                let pixels = thumb.into_raw();
                let color = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
                Some(ctx.load_texture("scan-preview", color, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                tracing::warn!("Failed to load preview for {}: {e}", image.file_name);
                None
            }
        }
    }

    fn paint_preview(&self, ui: &mut egui::Ui) {
        let Some(tex) = &self.preview else {
            return;
        };
        let size = tex.size_vec2();
        let scale = (PREVIEW_SIZE as f32 / size.x.max(size.y)).min(1.0);
        let (resp, painter) = ui.allocate_painter(size * scale, egui::Sense::hover());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(tex.id(), resp.rect, uv, egui::Color32::WHITE);
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_theme(match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    });
}

fn show_alert(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Scan failed")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_pending(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Recycle Scan");
                let label = if self.flow.theme().is_dark() {
                    "Light mode"
                } else {
                    "Dark mode"
                };
                if ui.button(label).clicked() {
                    apply_theme(ctx, self.flow.toggle_theme());
                }
                ui.label(format!("v{}", self.app_version));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.flow.step() {
            FlowStep::Upload => self.render_upload_panel(ctx, ui),
            FlowStep::Scanning => self.render_scanning_panel(ui),
            FlowStep::Results => self.render_results_panel(ui),
        });
    }
}
