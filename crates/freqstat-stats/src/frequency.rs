//! Frequency distribution tables.
//!
//! Small samples get a *discrete* table with one row per distinct value.
//! Larger samples (more than [`GROUPED_THRESHOLD`] observations) get a
//! *grouped* table whose classes follow Sturges' rule:
//!
//! - number of classes: `round(1 + 3.322 * log10(N))`
//! - class width: `ceil(range / number_of_classes)`
//! - classes start at the sample minimum and are half-open `[lower, upper)`,
//!   except the last one, which also includes its upper bound so the maximum
//!   observation is always counted.
//!
//! # Examples
//!
//! ```
//! use freqstat_stats::{frequency::FrequencyTable, sample::Sample};
//!
//! let sample = Sample::parse("10, 20, 20, 30").unwrap();
//! let table = FrequencyTable::build(&sample);
//!
//! let FrequencyTable::Discrete(rows) = &table else { panic!("expected discrete table") };
//! let cumulative: Vec<_> = rows.iter().map(|r| r.counts.cumulative_frequency).collect();
//! assert_eq!(cumulative, vec![1, 3, 4]);
//! ```

use std::{cmp::Ordering, collections::BTreeMap};

use serde::Serialize;

use crate::sample::Sample;

/// Samples larger than this get a grouped table.
pub const GROUPED_THRESHOLD: usize = 20;

/// Class width used when every observation has the same value.
const DEGENERATE_CLASS_WIDTH: f64 = 1.0;

/// An `f64` usable as an ordered map key.
///
/// Ordering follows [`f64::total_cmp`]. Samples never contain NaN and have
/// negative zero normalized away, so this agrees with numeric order.
#[derive(Debug, Clone, Copy)]
pub struct ValueKey(pub f64);

impl PartialEq for ValueKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ValueKey {}

impl PartialOrd for ValueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Counts occurrences of each distinct value, in ascending value order.
///
/// # Examples
///
/// ```
/// use freqstat_stats::{frequency::count_values, sample::Sample};
///
/// let sample = Sample::parse("3, 1, 3").unwrap();
/// let counts: Vec<_> = count_values(&sample).into_iter().map(|(k, c)| (k.0, c)).collect();
/// assert_eq!(counts, vec![(1.0, 1), (3.0, 2)]);
/// ```
#[must_use]
pub fn count_values(sample: &Sample) -> BTreeMap<ValueKey, usize> {
    let mut counts = BTreeMap::new();
    for &value in sample.values() {
        *counts.entry(ValueKey(value)).or_insert(0) += 1;
    }
    counts
}

/// Absolute, cumulative and relative frequencies shared by both row kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyCounts {
    /// Observations in this row (`fᵢ`).
    pub frequency: usize,
    /// Observations in this row and every row before it (`Fᵢ`).
    pub cumulative_frequency: usize,
    /// `frequency / N` (`hᵢ`).
    pub relative_frequency: f64,
    /// `cumulative_frequency / N` (`Hᵢ`).
    pub cumulative_relative_frequency: f64,
}

/// A row of a discrete table: one distinct observed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscreteRow {
    pub value: f64,
    #[serde(flatten)]
    pub counts: FrequencyCounts,
}

/// A row of a grouped table: one class interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedRow {
    /// Display label, `"lower - upper"` with two decimals.
    pub interval: String,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound; exclusive except for the last class, which always reaches
    /// the sample maximum.
    pub upper: f64,
    #[serde(flatten)]
    pub counts: FrequencyCounts,
}

impl GroupedRow {
    /// Formats a class interval the way tables display it.
    ///
    /// ```
    /// # use freqstat_stats::frequency::GroupedRow;
    /// assert_eq!(GroupedRow::interval_label(0.0, 17.0), "0.00 - 17.00");
    /// ```
    #[must_use]
    pub fn interval_label(lower: f64, upper: f64) -> String {
        format!("{lower:.2} - {upper:.2}")
    }
}

/// Which kind of table a sample produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TableKind {
    #[display("discrete")]
    Discrete,
    #[display("grouped")]
    Grouped,
}

impl TableKind {
    /// Chooses the table kind for a sample of `count` observations.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count > GROUPED_THRESHOLD {
            Self::Grouped
        } else {
            Self::Discrete
        }
    }
}

/// A frequency distribution: rows of a single kind, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "camelCase")]
pub enum FrequencyTable {
    Discrete(Vec<DiscreteRow>),
    Grouped(Vec<GroupedRow>),
}

impl FrequencyTable {
    /// Builds a discrete or grouped table depending on the sample size.
    #[must_use]
    pub fn build(sample: &Sample) -> Self {
        match TableKind::for_count(sample.count()) {
            TableKind::Discrete => Self::discrete(sample),
            TableKind::Grouped => Self::grouped(sample),
        }
    }

    /// Builds a table with one row per distinct value.
    #[must_use]
    pub fn discrete(sample: &Sample) -> Self {
        let mut accumulator = Accumulator::new(sample.count());
        let rows = count_values(sample)
            .into_iter()
            .map(|(value, frequency)| DiscreteRow {
                value: value.0,
                counts: accumulator.push(frequency),
            })
            .collect();
        Self::Discrete(rows)
    }

    /// Builds a table of Sturges' rule classes starting at the sample minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::{frequency::FrequencyTable, sample::Sample};
    ///
    /// let values = (0..25).map(|i| f64::from(i) * 100.0 / 24.0).collect();
    /// let sample = Sample::new(values).unwrap();
    ///
    /// let FrequencyTable::Grouped(rows) = FrequencyTable::grouped(&sample) else { unreachable!() };
    /// assert_eq!(rows.len(), 6);
    /// assert_eq!(rows[0].interval, "0.00 - 17.00");
    /// ```
    #[must_use]
    pub fn grouped(sample: &Sample) -> Self {
        let sorted = sample.sorted();
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let num_classes = sturges_class_count(sorted.len());
        let width = class_width(max - min, num_classes);

        let mut accumulator = Accumulator::new(sorted.len());
        let mut remaining = sorted.as_slice();
        let rows = (0..num_classes)
            .map(|class_idx| {
                // Bounds from the index, not by repeated addition, to avoid drift.
                let lower = class_bound(min, width, class_idx);
                let mut upper = class_bound(min, width, class_idx + 1);
                let frequency = if class_idx + 1 == num_classes {
                    // `min + width * k` can round to just below `max`.
                    if upper < max || !upper.is_finite() {
                        upper = max;
                    }
                    remaining.len()
                } else {
                    remaining.partition_point(|&v| v < upper)
                };
                remaining = &remaining[frequency..];
                GroupedRow {
                    interval: GroupedRow::interval_label(lower, upper),
                    lower,
                    upper,
                    counts: accumulator.push(frequency),
                }
            })
            .collect();
        Self::Grouped(rows)
    }

    #[must_use]
    pub fn kind(&self) -> TableKind {
        match self {
            Self::Discrete(_) => TableKind::Discrete,
            Self::Grouped(_) => TableKind::Grouped,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Discrete(rows) => rows.len(),
            Self::Grouped(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row labels paired with their counts, in table order.
    ///
    /// Discrete values are labelled with their shortest round-trip form,
    /// grouped rows with their interval label.
    #[must_use]
    pub fn labelled_counts(&self) -> Vec<(String, FrequencyCounts)> {
        match self {
            Self::Discrete(rows) => rows
                .iter()
                .map(|row| (row.value.to_string(), row.counts))
                .collect(),
            Self::Grouped(rows) => rows
                .iter()
                .map(|row| (row.interval.clone(), row.counts))
                .collect(),
        }
    }

    /// Sum of the row frequencies.
    #[must_use]
    pub fn total_frequency(&self) -> usize {
        self.labelled_counts().iter().map(|(_, c)| c.frequency).sum()
    }
}

/// Sturges' rule: `round(1 + 3.322 * log10(count))`.
///
/// ```
/// # use freqstat_stats::frequency::sturges_class_count;
/// assert_eq!(sturges_class_count(25), 6);
/// assert_eq!(sturges_class_count(21), 5);
/// assert_eq!(sturges_class_count(100), 8);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn sturges_class_count(count: usize) -> usize {
    let classes = (1.0 + 3.322 * (count as f64).log10()).round();
    (classes as usize).max(1)
}

/// Class width for `num_classes` classes covering `range`, rounded up to an
/// integer.
///
/// ```
/// # use freqstat_stats::frequency::class_width;
/// assert_eq!(class_width(100.0, 6), 17.0);
/// assert_eq!(class_width(0.5, 6), 1.0);
/// assert_eq!(class_width(0.0, 6), 1.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn class_width(range: f64, num_classes: usize) -> f64 {
    let width = (range / num_classes as f64).ceil();
    if width > 0.0 {
        width
    } else {
        DEGENERATE_CLASS_WIDTH
    }
}

#[expect(clippy::cast_precision_loss)]
fn class_bound(min: f64, width: f64, class_idx: usize) -> f64 {
    min + width * class_idx as f64
}

#[derive(Debug)]
struct Accumulator {
    total: usize,
    cumulative: usize,
}

impl Accumulator {
    fn new(total: usize) -> Self {
        Self {
            total,
            cumulative: 0,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn push(&mut self, frequency: usize) -> FrequencyCounts {
        self.cumulative += frequency;
        let total = self.total as f64;
        FrequencyCounts {
            frequency,
            cumulative_frequency: self.cumulative,
            relative_frequency: frequency as f64 / total,
            cumulative_relative_frequency: self.cumulative as f64 / total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_table_totals(table: &FrequencyTable, count: usize) {
        let counts = table.labelled_counts();
        assert_eq!(table.total_frequency(), count);
        let last = counts.last().unwrap().1;
        assert_eq!(last.cumulative_frequency, count);
        assert!((last.cumulative_relative_frequency - 1.0).abs() < 1e-12);
        assert!(
            counts
                .windows(2)
                .all(|w| w[0].1.cumulative_frequency <= w[1].1.cumulative_frequency)
        );
    }

    #[test]
    fn test_discrete_end_to_end_example() {
        let sample = Sample::parse("10, 20, 20, 30").unwrap();
        let table = FrequencyTable::build(&sample);
        let FrequencyTable::Discrete(rows) = &table else {
            panic!("expected discrete table");
        };
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.value, r.counts.frequency, r.counts.cumulative_frequency))
            .collect();
        assert_eq!(summary, vec![(10.0, 1, 1), (20.0, 2, 3), (30.0, 1, 4)]);
        assert_eq!(rows[1].counts.relative_frequency, 0.5);
        assert_eq!(rows[1].counts.cumulative_relative_frequency, 0.75);
        assert_table_totals(&table, 4);
    }

    #[test]
    fn test_discrete_rows_sorted_ascending_with_negatives() {
        let sample = Sample::parse("5, -1.5, 3, -1.5, 0, -0").unwrap();
        let FrequencyTable::Discrete(rows) = FrequencyTable::discrete(&sample) else {
            unreachable!();
        };
        let values: Vec<_> = rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![-1.5, 0.0, 3.0, 5.0]);
        assert_eq!(rows[1].counts.frequency, 2);
    }

    #[test]
    fn test_kind_selection_threshold() {
        let twenty = Sample::new((0..20).map(f64::from).collect()).unwrap();
        let twenty_one = Sample::new((0..21).map(f64::from).collect()).unwrap();
        assert_eq!(FrequencyTable::build(&twenty).kind(), TableKind::Discrete);
        assert_eq!(FrequencyTable::build(&twenty_one).kind(), TableKind::Grouped);
        assert_eq!(TableKind::for_count(1), TableKind::Discrete);
    }

    #[test]
    fn test_grouped_twenty_five_values_spanning_hundred() {
        let values = (0..25).map(|i| f64::from(i) * 100.0 / 24.0).collect();
        let sample = Sample::new(values).unwrap();
        let table = FrequencyTable::build(&sample);
        let FrequencyTable::Grouped(rows) = &table else {
            panic!("expected grouped table");
        };
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].lower, 0.0);
        assert_eq!(rows[5].upper, 102.0);
        assert_eq!(rows[5].interval, "85.00 - 102.00");
        assert_table_totals(&table, 25);
    }

    #[test]
    fn test_grouped_last_class_includes_maximum_on_boundary() {
        // 21 values -> 5 classes; range 50 -> width 10, so the maximum sits
        // exactly on the last upper bound.
        let mut values: Vec<f64> = (0..20).map(f64::from).collect();
        values.push(50.0);
        let sample = Sample::new(values).unwrap();
        let table = FrequencyTable::grouped(&sample);
        let FrequencyTable::Grouped(rows) = &table else {
            unreachable!();
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].upper, 50.0);
        assert_eq!(rows[4].counts.frequency, 1);
        assert_eq!(rows[0].counts.frequency, 10);
        assert_eq!(rows[1].counts.frequency, 10);
        assert_table_totals(&table, 21);
    }

    #[test]
    fn test_grouped_half_open_inner_boundaries() {
        let mut values = vec![0.0; 10];
        values.extend([10.0; 10]);
        values.extend([40.0; 5]);
        let sample = Sample::new(values).unwrap();
        let FrequencyTable::Grouped(rows) = FrequencyTable::grouped(&sample) else {
            unreachable!();
        };
        // 25 values -> 6 classes, width ceil(40 / 6) = 7
        assert_eq!(rows[0].counts.frequency, 10);
        assert_eq!(rows[1].counts.frequency, 10);
        assert_eq!(rows[1].lower, 7.0);
        assert_eq!(rows[5].counts.frequency, 5);
    }

    #[test]
    fn test_grouped_constant_sample() {
        let sample = Sample::new(vec![3.5; 30]).unwrap();
        let table = FrequencyTable::build(&sample);
        let FrequencyTable::Grouped(rows) = &table else {
            panic!("expected grouped table");
        };
        assert_eq!(rows[0].interval, "3.50 - 4.50");
        assert_eq!(rows[0].counts.frequency, 30);
        assert_table_totals(&table, 30);
    }

    #[test]
    fn test_grouped_fractional_values() {
        let values = (0..40).map(|i| f64::from(i) * 0.01).collect();
        let sample = Sample::new(values).unwrap();
        let table = FrequencyTable::grouped(&sample);
        assert_eq!(table.labelled_counts()[0].1.frequency, 40);
        assert_table_totals(&table, 40);
    }

    #[test]
    fn test_grouped_last_class_keeps_maximum_with_fractional_minimum() {
        // `max - min` rounds, so `min + width * k` lands one ulp below `max`.
        let min = 1_298.372_421_141_023_6;
        let max = 10_498.372_421_141_024;
        let mut values = vec![2_000.0; 20];
        values.extend([min, max]);
        let sample = Sample::new(values).unwrap();
        let table = FrequencyTable::build(&sample);
        let FrequencyTable::Grouped(rows) = &table else {
            panic!("expected grouped table");
        };
        let last = rows.last().unwrap();
        assert!(last.upper >= max);
        assert!(last.counts.frequency >= 1);
        assert_table_totals(&table, 22);
    }

    #[test]
    fn test_grouped_totals_for_offset_one_decimal_samples() {
        for offset in [0.1, 123.4, 98_765.3, 1_000_000.7] {
            let values = (0..37)
                .map(|i| offset + f64::from(i * 7 % 23) * 0.1)
                .chain([offset + 41.3])
                .collect();
            let sample = Sample::new(values).unwrap();
            let table = FrequencyTable::grouped(&sample);
            assert_table_totals(&table, 38);
        }
    }

    #[test]
    fn test_grouped_bounds_finite_at_extreme_magnitudes() {
        let mut values = vec![1e307; 11];
        values.extend([f64::MAX; 10]);
        let sample = Sample::new(values).unwrap();
        let table = FrequencyTable::grouped(&sample);
        let FrequencyTable::Grouped(rows) = &table else {
            unreachable!();
        };
        assert!(rows.iter().all(|r| r.lower.is_finite() && r.upper.is_finite()));
        assert!(rows.iter().all(|r| !r.interval.contains("NaN")));
        assert_eq!(rows.last().unwrap().upper, f64::MAX);
        assert_table_totals(&table, 21);
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let sample = Sample::parse("1, 1, 2").unwrap();
        let json = serde_json::to_value(FrequencyTable::build(&sample)).unwrap();
        assert_eq!(json["kind"], "discrete");
        assert_eq!(json["rows"][0]["value"], 1.0);
        assert_eq!(json["rows"][0]["frequency"], 2);
        assert_eq!(json["rows"][1]["cumulativeFrequency"], 3);
    }
}
