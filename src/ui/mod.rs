pub mod dashboard;
pub mod panels;
pub mod plot;
pub mod table;

use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0e, 0x11, 0x17);
pub const SIDEBAR: Color32 = Color32::from_rgb(0x1c, 0x1f, 0x26);

/// Dark theme matching the chart backgrounds.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    ctx.set_visuals(visuals);
}

/// Side panel frame in the sidebar colour.
pub fn sidebar_frame(ctx: &egui::Context) -> egui::Frame {
    egui::Frame::side_top_panel(&ctx.style()).fill(SIDEBAR)
}
