use super::aggregate::{self, Bin};
use super::filter::Subset;
use super::model::{Category, Column, Measure};

/// Headline metrics. All zero / empty when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kpis {
    pub mean_usd: f64,
    pub max_usd: f64,
    pub count: usize,
    pub top_title: String,
}

/// What the summary needs to know beyond the subset itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryParams {
    pub top_n: usize,
    pub histogram_bins: usize,
    pub focus_title: String,
}

impl From<&crate::config::DashboardConfig> for SummaryParams {
    fn from(config: &crate::config::DashboardConfig) -> Self {
        Self {
            top_n: config.top_n,
            histogram_bins: config.histogram_bins,
            focus_title: config.focus_title.clone(),
        }
    }
}

/// Everything the dashboard page renders for one selection.
///
/// `None` in a chart field means there is nothing to plot; the UI shows a
/// placeholder for that chart only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub kpis: Kpis,
    pub top_titles: Option<Vec<(Category, f64)>>,
    pub salary_histogram: Option<Vec<Bin>>,
    pub remote_share: Option<Vec<(Category, usize)>>,
    pub focus_by_country: Option<Vec<(Category, f64)>>,
    pub focus_seniority_share: Option<Vec<(Category, usize)>>,
    pub focus_seniority_mean: Option<Vec<(Category, f64)>>,
    pub mean_by_company_size: Option<Vec<(Category, f64)>>,
    pub focus_mean_by_contract: Option<Vec<(Category, f64)>>,
}

fn non_empty<T>(subset: &Subset<'_>, f: impl FnOnce() -> T) -> Option<T> {
    (!subset.is_empty()).then(f)
}

impl DashboardSummary {
    pub fn compute(subset: &Subset<'_>, params: &SummaryParams) -> Self {
        let kpis = Kpis {
            mean_usd: aggregate::mean(subset, Measure::Usd),
            max_usd: aggregate::max(subset, Measure::Usd),
            count: aggregate::count(subset),
            top_title: aggregate::mode(subset, Column::Title),
        };

        let focus = subset.restrict(Column::Title, &Category::from(params.focus_title.as_str()));

        Self {
            kpis,
            top_titles: non_empty(subset, || {
                aggregate::top_n_by_group_mean(subset, Column::Title, Measure::Usd, params.top_n)
            }),
            salary_histogram: non_empty(subset, || {
                aggregate::histogram_bins(subset, Measure::Usd, params.histogram_bins)
            }),
            remote_share: non_empty(subset, || aggregate::value_counts(subset, Column::Remote)),
            focus_by_country: non_empty(&focus, || {
                aggregate::group_mean(&focus, Column::ResidenceIso3, Measure::Usd)
            }),
            focus_seniority_share: non_empty(&focus, || {
                aggregate::value_counts(&focus, Column::Seniority)
            }),
            focus_seniority_mean: non_empty(&focus, || {
                aggregate::group_mean(&focus, Column::Seniority, Measure::Usd)
            }),
            mean_by_company_size: non_empty(subset, || {
                aggregate::group_mean(subset, Column::CompanySize, Measure::Usd)
            }),
            focus_mean_by_contract: non_empty(&focus, || {
                aggregate::group_mean(&focus, Column::Contract, Measure::Usd)
            }),
        }
    }

    /// True when not a single record passed the filters.
    pub fn is_empty(&self) -> bool {
        self.kpis.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::model::tests::{record, sample};
    use crate::data::model::Dataset;

    fn params() -> SummaryParams {
        SummaryParams::from(&DashboardConfig::default())
    }

    #[test]
    fn empty_subset_has_no_charts() {
        let ds = sample();
        let summary = DashboardSummary::compute(&Subset::from_indices(&ds, vec![]), &params());
        assert!(summary.is_empty());
        assert_eq!(summary, DashboardSummary::default());
    }

    #[test]
    fn focus_charts_follow_focus_title() {
        let mut engineer = record(2023, "Senior", "CLT", "L", 300.0);
        engineer.title = "Data Engineer".to_string();
        engineer.residence_iso3 = "USA".to_string();
        let ds = Dataset::from_records(vec![
            engineer,
            record(2023, "Senior", "CLT", "L", 100.0),
            record(2023, "Junior", "PJ", "M", 50.0),
        ]);
        let summary = DashboardSummary::compute(&Subset::all(&ds), &params());

        assert_eq!(summary.kpis.count, 3);
        assert_eq!(summary.kpis.max_usd, 300.0);
        assert_eq!(summary.kpis.top_title, "Data Scientist");
        assert_eq!(
            summary.focus_by_country,
            Some(vec![(Category::from("BRA"), 75.0)])
        );
        assert_eq!(
            summary.focus_mean_by_contract,
            Some(vec![(Category::from("CLT"), 100.0), (Category::from("PJ"), 50.0)])
        );
        assert_eq!(
            summary.top_titles,
            Some(vec![(Category::from("Data Scientist"), 75.0), (Category::from("Data Engineer"), 300.0)])
        );
        assert_eq!(summary.salary_histogram.map(|b| b.len()), Some(40));
    }

    #[test]
    fn missing_focus_title_only_hides_focus_charts() {
        let ds = sample();
        let mut p = params();
        p.focus_title = "Astronaut".to_string();
        let summary = DashboardSummary::compute(&Subset::all(&ds), &p);

        assert!(summary.focus_by_country.is_none());
        assert!(summary.focus_seniority_share.is_none());
        assert!(summary.focus_seniority_mean.is_none());
        assert!(summary.focus_mean_by_contract.is_none());
        assert!(summary.remote_share.is_some());
        assert_eq!(
            summary.mean_by_company_size,
            Some(vec![(Category::from("L"), 75.0), (Category::from("M"), 200.0)])
        );
    }
}
