use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::DataSource;
use crate::data::model::Column;
use crate::format;
use crate::state::{AppState, SelectionEvent};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
///
/// Checkbox changes are collected as [`SelectionEvent`]s and applied after
/// the widgets are drawn, so the state is recomputed once per interaction.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let mut events = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for col in Column::FACETS {
                let (n_selected, n_total) = state.facet_counts(col);
                let header_text = format!("{}  ({n_selected}/{n_total})", col.label());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(col.header())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                events.push(SelectionEvent::SelectAll(col));
                            }
                            if ui.small_button("None").clicked() {
                                events.push(SelectionEvent::SelectNone(col));
                            }
                        });

                        let selected = state.selection.accepted(col);
                        for val in state.catalog.values(col) {
                            let mut checked = selected.is_some_and(|s| s.contains(val));
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                events.push(SelectionEvent::Toggle(col, val.clone()));
                            }
                        }
                    });
            }

            ui.separator();
            if ui.button("Reset filters").clicked() {
                events.push(SelectionEvent::Reset);
            }
        });

    for event in events {
        state.apply(event);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load configured dataset").clicked() {
                // Failures are kept in `status_message`.
                state.load_configured();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                format::thousands(ds.len() as u64),
                format::thousands(state.visible_indices.len() as u64)
            ));
        }
        if let Some(source) = &state.source {
            ui.separator();
            ui.label(RichText::new(source.to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load(DataSource::Path(path));
    }
}
