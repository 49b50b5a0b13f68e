//! GUI entry point for Estaciona

mod app;
mod park_panel;
mod vehicle_panel;

use app::EstacionaApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Phone-ish portrait window, the app was designed for one-handed use
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Estaciona",
        options,
        Box::new(|cc| Ok(Box::new(EstacionaApp::new(cc)))),
    )
}
