mod app;
mod color;
mod config;
mod data;
mod format;
mod state;
mod ui;

use app::SalaryDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::load_or_default();
    log::info!("Dataset source: {}", config.source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(SalaryDashboardApp::new(cc, &config)))),
    )
}
