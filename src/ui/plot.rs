use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

use crate::color::{self, ColorMap};
use crate::data::aggregate::Bin;
use crate::data::model::Category;
use crate::format;

const CHART_HEIGHT: f32 = 320.0;
const ACCENT: Color32 = Color32::from_rgb(0x63, 0x6e, 0xfa);

// ---------------------------------------------------------------------------
// Chart frame
// ---------------------------------------------------------------------------

/// Title plus either the chart or a "no data" placeholder.
pub fn chart_card<T>(ui: &mut Ui, title: &str, data: Option<&T>, draw: impl FnOnce(&mut Ui, &T)) {
    ui.label(RichText::new(title).size(18.0).color(Color32::LIGHT_GRAY));
    match data {
        Some(data) => draw(ui, data),
        None => {
            ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui: &mut Ui| {
                ui.label(RichText::new("⚠ No data to display for this chart.").color(Color32::YELLOW));
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Axis formatter printing `labels[i]` at integer position `i`.
fn category_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let pos = mark.value.round();
        if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
            return String::new();
        }
        labels.get(pos as usize).cloned().unwrap_or_default()
    }
}

fn usd_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format::usd_short(mark.value)
}

fn base_plot(id: &str) -> Plot<'static> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
}

fn labels<T>(data: &[(Category, T)]) -> Vec<String> {
    data.iter().map(|(c, _)| c.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Horizontal bars, first entry at the bottom.
pub fn horizontal_bars(ui: &mut Ui, id: &str, data: &[(Category, f64)], value_label: &str) {
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, (cat, v))| Bar::new(i as f64, *v).name(cat).width(0.7))
        .collect();

    base_plot(id)
        .x_axis_label(value_label)
        .x_axis_formatter(usd_axis)
        .y_axis_formatter(category_axis(labels(data)))
        .show_y(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().color(ACCENT));
        });
}

/// Vertical bars, one per category in the given order.
pub fn vertical_bars(
    ui: &mut Ui,
    id: &str,
    data: &[(Category, f64)],
    category_label: &str,
    value_label: &str,
) {
    let colors = ColorMap::new(data.iter().map(|(c, _)| c));
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, (cat, v))| {
            Bar::new(i as f64, *v)
                .name(cat)
                .fill(colors.color_for(cat))
                .width(0.6)
        })
        .collect();

    base_plot(id)
        .x_axis_label(category_label)
        .y_axis_label(value_label)
        .x_axis_formatter(category_axis(labels(data)))
        .y_axis_formatter(usd_axis)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Salary distribution as adjacent bars, one per bin.
pub fn histogram(ui: &mut Ui, id: &str, bins: &[Bin]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            let width = if b.width() > 0.0 { b.width() } else { 1.0 };
            Bar::new(b.center(), b.count as f64)
                .name(format!("{} – {}", format::usd(b.low), format::usd(b.high)))
                .width(width)
        })
        .collect();

    base_plot(id)
        .x_axis_label("Salary range (USD)")
        .y_axis_label("Records")
        .x_axis_formatter(usd_axis)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(ACCENT));
        });
}

/// Mean salary per country, each bar coloured on a sequential scale.
///
/// Stands in for a filled map: no country shapes ship with the app.
pub fn country_map(ui: &mut Ui, id: &str, data: &[(Category, f64)]) {
    let mut data = data.to_vec();
    data.sort_by(|a, b| a.1.total_cmp(&b.1));

    let lo = data.first().map_or(0.0, |d| d.1);
    let hi = data.last().map_or(0.0, |d| d.1);
    let span = hi - lo;

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, (cat, v))| {
            let t = if span > 0.0 { (v - lo) / span } else { 1.0 };
            Bar::new(i as f64, *v)
                .name(cat)
                .fill(color::sequential(t))
                .width(0.8)
        })
        .collect();

    base_plot(id)
        .x_axis_label("Mean salary (USD)")
        .x_axis_formatter(usd_axis)
        .y_axis_formatter(category_axis(labels(&data)))
        .show_y(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

/// Line with a marker per category.
pub fn line_with_markers(
    ui: &mut Ui,
    id: &str,
    data: &[(Category, f64)],
    category_label: &str,
    value_label: &str,
) {
    let points: Vec<[f64; 2]> = data
        .iter()
        .enumerate()
        .map(|(i, (_, v))| [i as f64, *v])
        .collect();

    base_plot(id)
        .x_axis_label(category_label)
        .y_axis_label(value_label)
        .x_axis_formatter(category_axis(labels(data)))
        .y_axis_formatter(usd_axis)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(ACCENT)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .radius(5.0)
                    .color(ACCENT),
            );
        });
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Arc resolution: one polygon per this many radians.
const PIE_STEP: f64 = TAU / 120.0;

fn polar(r: f64, angle: f64) -> [f64; 2] {
    [r * angle.cos(), r * angle.sin()]
}

/// Pie (or donut, for `hole > 0`) of category shares with percent labels.
///
/// Slices start at 12 o'clock and run clockwise. Each slice is drawn as a
/// run of small convex segments so the fill stays correct for wide slices.
pub fn pie(ui: &mut Ui, id: &str, data: &[(Category, usize)], hole: f64) {
    let total: usize = data.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return;
    }
    let colors = ColorMap::new(data.iter().map(|(c, _)| c));
    let inner = hole.clamp(0.0, 0.95);

    base_plot(id)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for (cat, n) in data {
                let frac = *n as f64 / total as f64;
                let sweep = frac * TAU;
                let fill = colors.color_for(cat);
                let name = cat.to_string();

                let steps = (sweep / PIE_STEP).ceil().max(1.0) as usize;
                for s in 0..steps {
                    let a0 = start - sweep * s as f64 / steps as f64;
                    let a1 = start - sweep * (s + 1) as f64 / steps as f64;
                    let outline = if inner > 0.0 {
                        vec![polar(inner, a0), polar(1.0, a0), polar(1.0, a1), polar(inner, a1)]
                    } else {
                        vec![[0.0, 0.0], polar(1.0, a0), polar(1.0, a1)]
                    };
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(outline))
                            .fill_color(fill)
                            .stroke(Stroke::new(1.0, fill))
                            .name(&name),
                    );
                }

                let mid = start - sweep / 2.0;
                let [x, y] = polar((1.0 + inner) / 2.0, mid);
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{name}\n{:.1}%", frac * 100.0)).color(Color32::WHITE),
                    ),
                );
                start -= sweep;
            }
        });
}
