use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Context;

use crate::config::DashboardConfig;
use crate::data::filter::{filter, Selection};
use crate::data::loader::{self, DataSource};
use crate::data::model::{Category, Column, Dataset, FacetCatalog};
use crate::data::summary::{DashboardSummary, SummaryParams};

// ---------------------------------------------------------------------------
// Selection events
// ---------------------------------------------------------------------------

/// A change requested by a filter control.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Toggle(Column, Category),
    SelectAll(Column),
    SelectNone(Column),
    /// Every facet back to its full value set.
    Reset,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// State of one dashboard session, independent of rendering.
///
/// Nothing here is global: a second window or user gets its own `AppState`
/// and may share only the immutable dataset.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<Dataset>>,

    /// Where `dataset` came from.
    pub source: Option<DataSource>,

    /// Source named in the configuration, used at startup and on reload.
    pub configured_source: DataSource,

    /// Distinct values of each facet in `dataset`.
    pub catalog: FacetCatalog,

    /// Per-facet filter selections.
    pub selection: Selection,

    /// Positions of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates for the current selection (cached).
    pub summary: DashboardSummary,

    pub params: SummaryParams,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            dataset: None,
            source: None,
            configured_source: DataSource::from(config.source.as_str()),
            catalog: FacetCatalog::default(),
            selection: Selection::default(),
            visible_indices: Vec::new(),
            summary: DashboardSummary::default(),
            params: SummaryParams::from(config),
            status_message: None,
        }
    }

    /// Load `source` and make it the current dataset.
    ///
    /// Returns whether the load succeeded. On failure the previous dataset
    /// (if any) stays in place and the error is kept in `status_message`.
    pub fn load(&mut self, source: DataSource) -> bool {
        let result = loader::load(&source).with_context(|| format!("loading dataset from {source}"));
        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records ({} dropped) from {}",
                    dataset.len(),
                    dataset.dropped,
                    source
                );
                if dataset.is_empty() {
                    log::warn!("{source} has no usable records");
                }
                self.set_dataset(Arc::new(dataset));
                self.source = Some(source);
                true
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                false
            }
        }
    }

    /// (Re)load the configured source.
    pub fn load_configured(&mut self) -> bool {
        self.load(self.configured_source.clone())
    }

    /// Ingest a dataset, select every facet value and recompute.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.catalog = FacetCatalog::build(&dataset);
        self.selection = Selection::full(&self.catalog);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Apply one filter change, then filter and aggregate once.
    pub fn apply(&mut self, event: SelectionEvent) {
        log::debug!("selection event: {event:?}");
        match event {
            SelectionEvent::Toggle(column, value) => self.selection.toggle(column, &value),
            SelectionEvent::SelectAll(column) => {
                self.selection.set(column, self.catalog.values(column).clone())
            }
            SelectionEvent::SelectNone(column) => self.selection.set(column, BTreeSet::new()),
            SelectionEvent::Reset => self.selection = Selection::full(&self.catalog),
        }
        self.recompute();
    }

    /// Recompute `visible_indices` and `summary` from the current selection.
    fn recompute(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.summary = DashboardSummary::default();
            return;
        };
        let subset = filter(ds, &self.selection);
        self.summary = DashboardSummary::compute(&subset, &self.params);
        self.visible_indices = subset.into_indices();
    }

    /// `(selected, total)` value counts for a facet header.
    pub fn facet_counts(&self, column: Column) -> (usize, usize) {
        let selected = self.selection.accepted(column).map_or(0, |s| s.len());
        (selected, self.catalog.values(column).len())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::tests::sample;

    fn state() -> AppState {
        let mut state = AppState::new(&DashboardConfig::default());
        state.set_dataset(Arc::new(sample()));
        state
    }

    #[test]
    fn new_dataset_shows_everything() {
        let state = state();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.summary.kpis.count, 3);
        assert_eq!(state.facet_counts(Column::Year), (2, 2));
    }

    #[test]
    fn toggle_refilters_and_reaggregates() {
        let mut state = state();
        state.apply(SelectionEvent::Toggle(Column::Year, Category::Integer(2022)));
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.kpis.mean_usd, 75.0);
        assert_eq!(state.summary.kpis.max_usd, 100.0);
        assert_eq!(state.facet_counts(Column::Year), (1, 2));
    }

    #[test]
    fn none_then_all_restores_full_dataset() {
        let mut state = state();
        state.apply(SelectionEvent::SelectNone(Column::CompanySize));
        assert!(state.visible_indices.is_empty());
        assert!(state.summary.is_empty());
        assert!(state.summary.top_titles.is_none());

        state.apply(SelectionEvent::SelectAll(Column::CompanySize));
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn reset_restores_every_facet() {
        let mut state = state();
        state.apply(SelectionEvent::SelectNone(Column::Seniority));
        state.apply(SelectionEvent::Toggle(Column::Contract, "PJ".into()));
        state.apply(SelectionEvent::Reset);
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn sessions_share_data_not_selection() {
        let dataset = Arc::new(sample());
        let mut a = AppState::new(&DashboardConfig::default());
        let mut b = AppState::new(&DashboardConfig::default());
        a.set_dataset(dataset.clone());
        b.set_dataset(dataset);

        a.apply(SelectionEvent::SelectNone(Column::Year));
        assert!(a.visible_indices.is_empty());
        assert_eq!(b.visible_indices.len(), 3);
    }

    #[test]
    fn successful_load_replaces_dataset() {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            tmp,
            "ano,senioridade,contrato,cargo,usd,residencia_iso3,remoto,tamanho_empresa\n\
             2024,senior,integral,Data Scientist,90,USA,remoto,media"
        )
        .unwrap();

        let mut state = state();
        state.status_message = Some("Error: stale".into());
        assert!(state.load(DataSource::Path(tmp.path().to_path_buf())));
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.kpis.max_usd, 90.0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut state = state();
        assert!(!state.load(DataSource::Path("/no/such/salaries.csv".into())));
        assert_eq!(state.visible_indices.len(), 3);
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("loading dataset from /no/such/salaries.csv")));
    }
}
