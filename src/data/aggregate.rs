//! Statistics over a [`Subset`].
//!
//! Every function is total: an empty subset yields `0`, `""` or an empty
//! vector instead of an error, so each chart can fall back on its own.

use std::collections::BTreeMap;

use super::filter::Subset;
use super::model::{Category, Column, Measure};

/// One equal-width histogram bin. `high` is exclusive except for the last bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

pub fn count(subset: &Subset<'_>) -> usize {
    subset.len()
}

/// Arithmetic mean; 0 on empty input.
pub fn mean(subset: &Subset<'_>, measure: Measure) -> f64 {
    if subset.is_empty() {
        return 0.0;
    }
    let sum: f64 = subset.iter().map(|r| r.measure(measure)).sum();
    sum / subset.len() as f64
}

/// Largest value; 0 on empty input.
pub fn max(subset: &Subset<'_>, measure: Measure) -> f64 {
    subset
        .iter()
        .map(|r| r.measure(measure))
        .reduce(f64::max)
        .unwrap_or(0.0)
}

fn counts_by(subset: &Subset<'_>, column: Column) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for r in subset.iter() {
        *counts.entry(r.category(column)).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value of `column`, rendered as text.
///
/// Ties go to the smallest value in [`Category`] order. Empty input yields
/// an empty string.
pub fn mode(subset: &Subset<'_>, column: Column) -> String {
    let mut best: Option<(Category, usize)> = None;
    for (value, n) in counts_by(subset, column) {
        if best.as_ref().map_or(true, |(_, m)| n > *m) {
            best = Some((value, n));
        }
    }
    best.map(|(v, _)| v.to_string()).unwrap_or_default()
}

/// Frequency table, most frequent first; ties keep [`Category`] order.
pub fn value_counts(subset: &Subset<'_>, column: Column) -> Vec<(Category, usize)> {
    let mut counts: Vec<_> = counts_by(subset, column).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Mean of `measure` per distinct value of `group`, in [`Category`] order.
pub fn group_mean(subset: &Subset<'_>, group: Column, measure: Measure) -> Vec<(Category, f64)> {
    let mut sums: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for r in subset.iter() {
        let entry = sums.entry(r.category(group)).or_insert((0.0, 0));
        entry.0 += r.measure(measure);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// The `n` groups with the largest mean, returned in ascending order of mean
/// (the bottom-to-top order of a horizontal bar chart).
pub fn top_n_by_group_mean(
    subset: &Subset<'_>,
    group: Column,
    measure: Measure,
    n: usize,
) -> Vec<(Category, f64)> {
    let mut means = group_mean(subset, group, measure);
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(n);
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    means
}

/// Equal-width histogram spanning `[min, max]` of the subset.
///
/// If all values are equal the result is a single bin holding every record.
pub fn histogram_bins(subset: &Subset<'_>, measure: Measure, bin_count: usize) -> Vec<Bin> {
    if subset.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let (lo, hi) = subset
        .iter()
        .map(|r| r.measure(measure))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    let span = hi - lo;
    if span <= 0.0 {
        return vec![Bin {
            low: lo,
            high: hi,
            count: subset.len(),
        }];
    }

    let width = span / bin_count as f64;
    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|i| Bin {
            low: lo + width * i as f64,
            high: if i + 1 == bin_count {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for r in subset.iter() {
        let v = r.measure(measure);
        let slot = (((v - lo) / width) as usize).min(bin_count - 1);
        bins[slot].count += 1;
    }
    bins
}
