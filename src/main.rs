mod app;
mod color;
mod dialogs;
mod error;
mod gesture;
mod imaging;
mod input;
mod scene;
mod settings;

use eframe::egui;

use crate::app::RectAnnotateApp;
use crate::settings::Settings;

const TITLE: &str = "rect-annotate";

// ── Main ────────────────────────────────────────────────────────────────────

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(RectAnnotateApp::new(&settings)))),
    )
}
