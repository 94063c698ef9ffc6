use serde::Serialize;

use crate::sample::Sample;

/// The percentile ranks reported in a summary.
pub const STANDARD_RANKS: [f64; 5] = [10.0, 25.0, 50.0, 75.0, 90.0];

/// A single percentile rank and its interpolated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileValue {
    /// Rank between 0.0 and 100.0.
    pub rank: f64,
    /// Interpolated value at `rank`.
    pub value: f64,
}

/// Precomputed percentile values for a sample.
///
/// # Examples
///
/// ```
/// use freqstat_stats::{percentiles::Percentiles, sample::Sample};
///
/// let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let percentiles = Percentiles::standard(&sample);
///
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert_eq!(percentiles.get(25.0), Some(2.0));
/// assert_eq!(percentiles.get(99.0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    values: Vec<PercentileValue>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order, or if a
    /// rank lies outside `0.0..=100.0`.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], ranks: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = ranks
            .iter()
            .map(|&rank| PercentileValue {
                rank,
                value: compute_percentile(sorted_values, rank),
            })
            .collect();
        Self { values }
    }

    /// Computes the requested percentile ranks of `sample`.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::{percentiles::Percentiles, sample::Sample};
    ///
    /// let sample = Sample::new(vec![5.0, 2.0, 8.0, 1.0]).unwrap();
    /// let percentiles = Percentiles::new(&sample, &[0.0, 100.0]);
    /// assert_eq!(percentiles.get(0.0), Some(1.0));
    /// assert_eq!(percentiles.get(100.0), Some(8.0));
    /// ```
    #[must_use]
    pub fn new(sample: &Sample, ranks: &[f64]) -> Self {
        Self::from_sorted(&sample.sorted(), ranks)
    }

    /// Computes the [`STANDARD_RANKS`] of `sample`.
    #[must_use]
    pub fn standard(sample: &Sample) -> Self {
        Self::new(sample, &STANDARD_RANKS)
    }

    /// Gets the value at a specific rank, if it was computed.
    #[must_use]
    pub fn get(&self, rank: f64) -> Option<f64> {
        self.values
            .iter()
            .find(|p| (p.rank - rank).abs() < f64::EPSILON)
            .map(|p| p.value)
    }

    /// The 50th percentile, if it was computed.
    #[must_use]
    pub fn median(&self) -> Option<f64> {
        self.get(50.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = PercentileValue> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PercentileValue] {
        &self.values
    }
}

/// Computes a single percentile from sorted data by linear interpolation.
///
/// The fractional position is `idx = rank / 100 * (n - 1)`; the result
/// interpolates between the order statistics at `floor(idx)` and `ceil(idx)`.
/// A single-element slice yields that element for every rank.
///
/// Returns `f64::NAN` if `sorted_values` is empty.
///
/// # Panics
///
/// Panics if `rank` is outside `0.0..=100.0`.
///
/// # Examples
///
/// ```
/// use freqstat_stats::percentiles::compute_percentile;
///
/// let values = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(compute_percentile(&values, 50.0), 25.0);
/// assert_eq!(compute_percentile(&values, 0.0), 10.0);
/// assert_eq!(compute_percentile(&values, 100.0), 40.0);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], rank: f64) -> f64 {
    assert!(
        (0.0..=100.0).contains(&rank),
        "percentile rank must be within 0..=100, got {rank}"
    );
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let idx = rank / 100.0 * (sorted_values.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    let lower = sorted_values[lo];
    lower + (sorted_values[hi] - lower) * (idx - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_length_is_middle_element() {
        let sample = Sample::new(vec![9.0, 1.0, 5.0, 3.0, 7.0]).unwrap();
        assert_eq!(Percentiles::standard(&sample).median(), Some(5.0));
    }

    #[test]
    fn test_median_even_length_averages_middle_pair() {
        let sample = Sample::new(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(Percentiles::standard(&sample).median(), Some(2.5));
    }

    #[test]
    fn test_single_value_for_all_ranks() {
        let sample = Sample::new(vec![42.0]).unwrap();
        let percentiles = Percentiles::standard(&sample);
        assert_eq!(percentiles.as_slice().len(), STANDARD_RANKS.len());
        assert!(percentiles.iter().all(|p| p.value == 42.0));
    }

    #[test]
    fn test_standard_ranks_interpolation() {
        let sorted: Vec<f64> = (1..=11).map(f64::from).collect();
        // n - 1 = 10, so every standard rank lands on an integral index
        let percentiles = Percentiles::from_sorted(&sorted, &STANDARD_RANKS);
        assert_eq!(percentiles.get(10.0), Some(2.0));
        assert_eq!(percentiles.get(25.0), Some(3.5));
        assert_eq!(percentiles.get(50.0), Some(6.0));
        assert_eq!(percentiles.get(75.0), Some(8.5));
        assert_eq!(percentiles.get(90.0), Some(10.0));
    }

    #[test]
    fn test_percentiles_are_monotonic() {
        let sample = Sample::parse("12, 3, 7, 7, 15, 1, 22, 9").unwrap();
        let percentiles = Percentiles::standard(&sample);
        let values: Vec<f64> = percentiles.iter().map(|p| p.value).collect();
        assert!(values.is_sorted_by(|a, b| a <= b));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = Sample::parse("1, 2, 3, 4, 5, 6").unwrap();
        let b = Sample::parse("6, 4, 2, 5, 3, 1").unwrap();
        assert_eq!(Percentiles::standard(&a), Percentiles::standard(&b));
    }

    #[test]
    fn test_empty_slice_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    #[should_panic(expected = "percentile rank must be within 0..=100")]
    fn test_rank_out_of_range_panics() {
        let _ = compute_percentile(&[1.0, 2.0], 120.0);
    }
}
