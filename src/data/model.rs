use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Category – a single value of a categorical column
// ---------------------------------------------------------------------------

/// A categorical cell value.
///
/// Integers (the survey year) sort before text, so a `BTreeSet<Category>`
/// gives the deterministic ordering used by filter controls and tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Integer(i64),
    Text(String),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Integer(i) => write!(f, "{i}"),
            Category::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Columns and measures
// ---------------------------------------------------------------------------

/// Categorical columns of the salary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Year,
    Seniority,
    Contract,
    CompanySize,
    Remote,
    Title,
    ResidenceIso3,
}

impl Column {
    /// The four columns exposed as filter controls, in sidebar order.
    pub const FACETS: [Column; 4] = [
        Column::Year,
        Column::Seniority,
        Column::Contract,
        Column::CompanySize,
    ];

    /// Header name in the source file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Year => "ano",
            Column::Seniority => "senioridade",
            Column::Contract => "contrato",
            Column::CompanySize => "tamanho_empresa",
            Column::Remote => "remoto",
            Column::Title => "cargo",
            Column::ResidenceIso3 => "residencia_iso3",
        }
    }

    /// Human readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Column::Year => "Year",
            Column::Seniority => "Seniority",
            Column::Contract => "Contract type",
            Column::CompanySize => "Company size",
            Column::Remote => "Work mode",
            Column::Title => "Job title",
            Column::ResidenceIso3 => "Country",
        }
    }
}

/// Numeric columns usable in mean / max / histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Usd,
    Year,
}

impl Measure {
    pub fn header(self) -> &'static str {
        match self {
            Measure::Usd => "usd",
            Measure::Year => Column::Year.header(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the salary table
// ---------------------------------------------------------------------------

/// A single salary observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i64,
    pub seniority: String,
    pub contract: String,
    pub company_size: String,
    pub remote: String,
    pub title: String,
    pub residence_iso3: String,
    /// Annual salary converted to USD; finite and non-negative.
    pub usd: f64,
}

impl Record {
    /// Borrow the text of a categorical column; `None` for the integer year.
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Year => None,
            Column::Seniority => Some(&self.seniority),
            Column::Contract => Some(&self.contract),
            Column::CompanySize => Some(&self.company_size),
            Column::Remote => Some(&self.remote),
            Column::Title => Some(&self.title),
            Column::ResidenceIso3 => Some(&self.residence_iso3),
        }
    }

    /// Owned categorical value of a column.
    pub fn category(&self, column: Column) -> Category {
        match self.text(column) {
            Some(s) => Category::Text(s.to_string()),
            None => Category::Integer(self.year),
        }
    }

    /// Whether this record's value for `column` equals `value`, without
    /// allocating.
    pub fn has(&self, column: Column, value: &Category) -> bool {
        match (self.text(column), value) {
            (Some(s), Category::Text(v)) => s == v,
            (None, Category::Integer(v)) => self.year == *v,
            _ => false,
        }
    }

    pub fn measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Usd => self.usd,
            Measure::Year => self.year as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All valid records, in source order.
    pub records: Vec<Record>,
    /// Rows skipped at load time because of null or out-of-range values.
    pub dropped: usize,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset {
            records,
            dropped: 0,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Facet catalog
// ---------------------------------------------------------------------------

/// Sorted distinct values of one categorical column.
pub fn distinct_values(dataset: &Dataset, column: Column) -> BTreeSet<Category> {
    dataset
        .records
        .iter()
        .map(|r| r.category(column))
        .collect()
}

/// Distinct values for every filterable column, computed once per dataset.
#[derive(Debug, Clone, Default)]
pub struct FacetCatalog {
    values: BTreeMap<Column, BTreeSet<Category>>,
}

impl FacetCatalog {
    pub fn build(dataset: &Dataset) -> Self {
        let values = Column::FACETS
            .iter()
            .map(|&col| (col, distinct_values(dataset, col)))
            .collect();
        FacetCatalog { values }
    }

    /// Values available for a facet; empty for columns that are not facets.
    pub fn values(&self, column: Column) -> &BTreeSet<Category> {
        static EMPTY: BTreeSet<Category> = BTreeSet::new();
        self.values.get(&column).unwrap_or(&EMPTY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &BTreeSet<Category>)> {
        self.values.iter().map(|(c, v)| (*c, v))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        year: i64,
        seniority: &str,
        contract: &str,
        size: &str,
        usd: f64,
    ) -> Record {
        Record {
            year,
            seniority: seniority.to_string(),
            contract: contract.to_string(),
            company_size: size.to_string(),
            remote: "remoto".to_string(),
            title: "Data Scientist".to_string(),
            residence_iso3: "BRA".to_string(),
            usd,
        }
    }

    /// The three-record scenario used across the data layer tests.
    pub(crate) fn sample() -> Dataset {
        Dataset::from_records(vec![
            record(2023, "Senior", "CLT", "L", 100.0),
            record(2023, "Junior", "CLT", "L", 50.0),
            record(2022, "Senior", "PJ", "M", 200.0),
        ])
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let ds = sample();
        let years: Vec<_> = distinct_values(&ds, Column::Year).into_iter().collect();
        assert_eq!(years, vec![Category::Integer(2022), Category::Integer(2023)]);

        let seniority: Vec<_> = distinct_values(&ds, Column::Seniority)
            .into_iter()
            .collect();
        assert_eq!(seniority, vec![Category::from("Junior"), Category::from("Senior")]);
    }

    #[test]
    fn catalog_covers_only_facets() {
        let catalog = FacetCatalog::build(&sample());
        assert_eq!(catalog.iter().count(), 4);
        assert_eq!(catalog.values(Column::Contract).len(), 2);
        assert!(catalog.values(Column::Title).is_empty());
    }

    #[test]
    fn integers_sort_before_text() {
        assert!(Category::Integer(9999) < Category::Text("0".into()));
    }

    #[test]
    fn has_matches_without_type_confusion() {
        let r = record(2023, "Senior", "CLT", "L", 1.0);
        assert!(r.has(Column::Year, &Category::Integer(2023)));
        assert!(!r.has(Column::Year, &"2023".into()));
        assert!(r.has(Column::Contract, &"CLT".into()));
        assert!(!r.has(Column::Contract, &"PJ".into()));
    }
}
