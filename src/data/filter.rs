use std::collections::{BTreeMap, BTreeSet};

use super::model::{Category, Column, Dataset, FacetCatalog, Record};

// ---------------------------------------------------------------------------
// Selection: which values are accepted per facet
// ---------------------------------------------------------------------------

/// Per-facet selection state: facet → set of accepted values.
///
/// Every facet present in the map constrains the result. An empty set
/// accepts nothing, so it empties the whole subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    accepted: BTreeMap<Column, BTreeSet<Category>>,
}

impl Selection {
    /// Initialise a selection with every catalogued value accepted.
    pub fn full(catalog: &FacetCatalog) -> Self {
        let accepted = catalog
            .iter()
            .map(|(col, vals)| (col, vals.clone()))
            .collect();
        Selection { accepted }
    }

    pub fn accepted(&self, column: Column) -> Option<&BTreeSet<Category>> {
        self.accepted.get(&column)
    }

    pub fn set(&mut self, column: Column, values: BTreeSet<Category>) {
        self.accepted.insert(column, values);
    }

    /// Flip a single value in a facet's accepted set.
    pub fn toggle(&mut self, column: Column, value: &Category) {
        let selected = self.accepted.entry(column).or_default();
        if !selected.remove(value) {
            selected.insert(value.clone());
        }
    }

    /// Whether `record` passes every facet constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.accepted
            .iter()
            .all(|(col, selected)| selected.contains(&record.category(*col)))
    }
}

// ---------------------------------------------------------------------------
// Subset: an ordered view into the dataset
// ---------------------------------------------------------------------------

/// The records of a dataset that passed a filter, in dataset order.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> Subset<'a> {
    /// The whole dataset as a subset.
    pub fn all(dataset: &'a Dataset) -> Self {
        Subset {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    /// Rebuild a subset from previously computed row positions.
    #[cfg(test)]
    pub fn from_indices(dataset: &'a Dataset, indices: Vec<usize>) -> Self {
        let indices = indices
            .into_iter()
            .filter(|&i| i < dataset.len())
            .collect();
        Subset { dataset, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = &self.dataset.records;
        self.indices.iter().map(move |&i| &records[i])
    }

    /// Keep only the rows that pass `selection`.
    pub fn refine(&self, selection: &Selection) -> Subset<'a> {
        self.keep(|r| selection.matches(r))
    }

    /// Keep only the rows whose `column` equals `value`.
    pub fn restrict(&self, column: Column, value: &Category) -> Subset<'a> {
        self.keep(|r| r.has(column, value))
    }

    fn keep(&self, pred: impl Fn(&Record) -> bool) -> Subset<'a> {
        let records = &self.dataset.records;
        let indices = self
            .indices
            .iter()
            .copied()
            .filter(|&i| pred(&records[i]))
            .collect();
        Subset {
            dataset: self.dataset,
            indices,
        }
    }
}

/// Return the subset of records that pass every facet in `selection`.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> Subset<'a> {
    Subset::all(dataset).refine(selection)
}
