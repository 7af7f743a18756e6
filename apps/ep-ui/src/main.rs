#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;

use app::EpicycleApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_title("Epicycles"),
        ..Default::default()
    };

    eframe::run_native(
        "Epicycles",
        options,
        Box::new(|cc| Ok(Box::new(EpicycleApp::new(cc)?))),
    )
}
