use super::UiApp;
use eframe::egui::{self, Color32, RichText};
use recycle_core::{Co2Impact, MaterialBreakdown, RecyclabilityTier};

const GOOD: Color32 = Color32::from_rgb(46, 160, 67);
const FAIR: Color32 = Color32::from_rgb(210, 153, 34);
const POOR: Color32 = Color32::from_rgb(207, 34, 46);

impl UiApp {
    pub(super) fn render_results_panel(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.flow.result().cloned() else {
            return;
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                self.paint_preview(ui);
                ui.add_space(8.0);
                ui.heading(&result.material);
                let (verdict, color) = if result.is_recyclable {
                    ("Recyclable", GOOD)
                } else {
                    ("Not recyclable", POOR)
                };
                ui.label(RichText::new(verdict).strong().color(color));
                ui.label(&result.summary);

                for part in &result.materials {
                    ui.add_space(8.0);
                    ui.separator();
                    render_breakdown(ui, part);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.label(RichText::new("How to dispose").strong());
                ui.label(&result.disposal_recommendation);

                ui.add_space(16.0);
                if ui.button("Scan another item").clicked() {
                    self.reset();
                }
            });
    }
}

fn render_breakdown(ui: &mut egui::Ui, part: &MaterialBreakdown) {
    ui.label(RichText::new(format!("{} ({})", part.material, percentage(part.percentage))).strong());
    ui.horizontal(|ui| {
        ui.label("Recyclability:");
        ui.label(RichText::new(part.recyclability.label()).color(tier_color(part.recyclability)));
    });
    ui.horizontal(|ui| {
        ui.label("CO₂ impact:");
        ui.label(RichText::new(part.co2_impact.label()).color(co2_color(part.co2_impact)));
    });
    if !part.description.is_empty() {
        ui.label(&part.description);
    }
    if !part.disposal_tips.is_empty() {
        ui.label("Tips:");
        for tip in &part.disposal_tips {
            ui.label(format!("• {tip}"));
        }
    }
}

fn percentage(value: f64) -> String {
    format!("{value:.0}%")
}

fn tier_color(tier: RecyclabilityTier) -> Color32 {
    match tier {
        RecyclabilityTier::HighlyRecyclable | RecyclabilityTier::Recyclable => GOOD,
        RecyclabilityTier::LimitedRecyclability | RecyclabilityTier::SpecialHandling => FAIR,
        RecyclabilityTier::NotRecyclable => POOR,
    }
}

fn co2_color(impact: Co2Impact) -> Color32 {
    match impact {
        Co2Impact::Low => GOOD,
        Co2Impact::Medium => FAIR,
        Co2Impact::High => POOR,
    }
}
