//! WageScope - Minimum Wage & Cost of Living Dashboard
//!
//! A Rust application for comparing minimum wages against monthly living
//! costs by country, with region filtering and per-country expense charts.

mod charts;
mod data;
mod gui;
mod metrics;

use eframe::egui;
use gui::WageScopeApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("WageScope"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "WageScope",
        options,
        Box::new(|cc| Ok(Box::new(WageScopeApp::new(cc)))),
    )
}
