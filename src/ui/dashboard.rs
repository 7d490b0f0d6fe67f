use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::data::summary::{DashboardSummary, Kpis, SummaryParams};
use crate::format;
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Central panel – the dashboard page
// ---------------------------------------------------------------------------

/// Render KPIs, the chart grid and the detail table.
pub fn dashboard_page(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            let msg = state
                .status_message
                .as_deref()
                .unwrap_or("Open a file to view salaries  (File → Open…)");
            ui.heading(RichText::new(msg).color(Color32::LIGHT_RED));
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading(
                    RichText::new("🎲 Data Industry Salary Dashboard")
                        .size(28.0)
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new(
                        "Explore salaries in the data field over recent years. \
                         Use the filters on the left to refine the analysis.",
                    )
                    .color(Color32::from_gray(192)),
                );
            });
            ui.add_space(12.0);

            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new("General metrics (annual salary in USD)")
                        .size(20.0)
                        .color(Color32::from_gray(192)),
                );
            });
            kpi_row(ui, &state.summary.kpis);
            ui.separator();

            charts(ui, &state.summary, &state.params);

            ui.separator();
            ui.heading("Detailed data");
            table::detail_table(ui, dataset, &state.visible_indices);
        });
}

fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    let cards = [
        ("Mean salary", format::usd(kpis.mean_usd)),
        ("Max salary", format::usd(kpis.max_usd)),
        ("Total records", format::thousands(kpis.count as u64)),
        ("Most frequent title", kpis.top_title.clone()),
    ];
    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (col, (label, value)) in cols.iter_mut().zip(cards) {
            col.label(RichText::new(label).color(Color32::GRAY));
            col.label(RichText::new(value).size(26.0).strong());
        }
    });
}

/// Two charts side by side.
fn chart_row(ui: &mut Ui, left: impl FnOnce(&mut Ui), right: impl FnOnce(&mut Ui)) {
    ui.columns(2, |cols: &mut [Ui]| {
        left(&mut cols[0]);
        right(&mut cols[1]);
    });
    ui.add_space(16.0);
}

fn charts(ui: &mut Ui, s: &DashboardSummary, params: &SummaryParams) {
    const SALARY: &str = "Mean annual salary (USD)";
    let focus = &params.focus_title;

    chart_row(
        ui,
        |ui| {
            plot::chart_card(
                ui,
                &format!("Top {} job titles by mean salary", params.top_n),
                s.top_titles.as_ref(),
                |ui, d| plot::horizontal_bars(ui, "top_titles", d, SALARY),
            )
        },
        |ui| {
            plot::chart_card(ui, "Annual salary distribution", s.salary_histogram.as_ref(), |ui, d| {
                plot::histogram(ui, "salary_histogram", d)
            })
        },
    );

    chart_row(
        ui,
        |ui| {
            plot::chart_card(ui, "Share of work modes", s.remote_share.as_ref(), |ui, d| {
                plot::pie(ui, "remote_share", d, 0.5)
            })
        },
        |ui| {
            plot::chart_card(
                ui,
                &format!("Mean {focus} salary by country"),
                s.focus_by_country.as_ref(),
                |ui, d| plot::country_map(ui, "focus_by_country", d),
            )
        },
    );

    chart_row(
        ui,
        |ui| {
            plot::chart_card(
                ui,
                &format!("{focus}: seniority distribution"),
                s.focus_seniority_share.as_ref(),
                |ui, d| plot::pie(ui, "focus_seniority_share", d, 0.0),
            )
        },
        |ui| {
            plot::chart_card(
                ui,
                &format!("{focus}: salary by seniority"),
                s.focus_seniority_mean.as_ref(),
                |ui, d| plot::vertical_bars(ui, "focus_seniority_mean", d, "Seniority", SALARY),
            )
        },
    );

    chart_row(
        ui,
        |ui| {
            plot::chart_card(
                ui,
                "Salary by company size",
                s.mean_by_company_size.as_ref(),
                |ui, d| plot::vertical_bars(ui, "company_size", d, "Company size", SALARY),
            )
        },
        |ui| {
            plot::chart_card(
                ui,
                &format!("{focus}: salary by contract type"),
                s.focus_mean_by_contract.as_ref(),
                |ui, d| plot::line_with_markers(ui, "focus_contract", d, "Contract type", SALARY),
            )
        },
    );
}
