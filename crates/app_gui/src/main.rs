mod app;

use app::UiApp;
use eframe::NativeOptions;
use recycle_core::AppConfig;

type DynError = Box<dyn std::error::Error + Send + Sync>;

fn main() {
    tracing_subscriber::fmt::init();
    let config = AppConfig::load_or_default();
    let options = NativeOptions::default();
    if let Err(e) = eframe::run_native(
        "Recycle Scan",
        options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, DynError> {
                let app = UiApp::new(cc, &config)?;
                Ok(Box::new(app))
            },
        ),
    ) {
        eprintln!("Application stopped with error: {e}");
    }
}
