use eframe::egui::Ui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Dataset;
use crate::format;

const HEADERS: [&str; 8] = [
    "Year",
    "Seniority",
    "Contract",
    "Company size",
    "Work mode",
    "Job title",
    "Country",
    "Salary (USD)",
];

/// Raw rows of the visible records.
pub fn detail_table(ui: &mut Ui, dataset: &Dataset, indices: &[usize]) {
    let row_height = 18.0;

    TableBuilder::new(ui)
        .id_salt("detail_table")
        .striped(true)
        .resizable(true)
        .max_scroll_height(420.0)
        .columns(TableColumn::auto().at_least(70.0), HEADERS.len() - 1)
        .column(TableColumn::remainder().at_least(90.0))
        .header(22.0, |mut header| {
            for name in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, indices.len(), |mut row| {
                let Some(r) = indices
                    .get(row.index())
                    .and_then(|&i| dataset.records.get(i))
                else {
                    return;
                };
                let cells = [
                    r.year.to_string(),
                    r.seniority.clone(),
                    r.contract.clone(),
                    r.company_size.clone(),
                    r.remote.clone(),
                    r.title.clone(),
                    r.residence_iso3.clone(),
                    format::usd(r.usd),
                ];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
