//! GUI entry point for chantier-ciment

mod app;
mod ledger_panel;

use app::CimentApp;
use eframe::egui;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Suivi Ciment Chantier",
        options,
        Box::new(|cc| Ok(Box::new(CimentApp::new(cc)))),
    )
}
