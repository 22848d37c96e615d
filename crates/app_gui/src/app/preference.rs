use eframe::egui;
use recycle_core::AmbientPreference;

/// Light/dark preference as reported by the windowing system at startup.
pub(super) struct SystemPreference(Option<egui::Theme>);

impl SystemPreference {
    pub(super) fn query(ctx: &egui::Context) -> Self {
        Self(ctx.system_theme())
    }
}

impl AmbientPreference for SystemPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0.map(|theme| theme == egui::Theme::Dark)
    }
}
