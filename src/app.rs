use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{self, dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashboardApp {
    pub state: AppState,
}

impl SalaryDashboardApp {
    /// Set up the theme and load the configured dataset once.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DashboardConfig) -> Self {
        ui::apply_theme(&cc.egui_ctx);

        let mut state = AppState::new(config);
        // A failed startup load leaves the page showing the error.
        state.load_configured();
        Self { state }
    }
}

impl eframe::App for SalaryDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .frame(ui::sidebar_frame(ctx))
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::dashboard_page(ui, &self.state);
        });
    }
}
