//! Moment-based and spread statistics for a [`Sample`].
//!
//! All measures use population conventions (divide by `N`, not `N - 1`).

use serde::Serialize;

use crate::{percentiles, sample::Sample};

/// Skewness is undefined because the sample has zero standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("skewness is undefined for a sample with zero standard deviation")]
pub struct DegenerateSkewnessError;

/// Arithmetic mean.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::{descriptive, sample::Sample};
/// let sample = Sample::new(vec![10.0, 20.0, 20.0, 30.0]).unwrap();
/// assert_eq!(descriptive::mean(&sample), 20.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(sample: &Sample) -> f64 {
    let values = sample.values();
    let count = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        sum / count
    } else {
        // The plain sum overflows near the limits of f64; divide first.
        values.iter().map(|v| v / count).sum()
    }
}

/// Population variance: the mean of squared deviations from the mean.
///
/// Returns exactly `0.0` when all observations are identical.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::{descriptive, sample::Sample};
/// let sample = Sample::new(vec![10.0, 20.0, 20.0, 30.0]).unwrap();
/// assert_eq!(descriptive::variance(&sample), 50.0);
/// ```
#[must_use]
pub fn variance(sample: &Sample) -> f64 {
    // Rounding in the mean can leave tiny residuals for constant samples.
    if sample.is_constant() {
        return 0.0;
    }
    let moments = ScaledMoments::new(sample);
    moments.scale * moments.scale * moments.second
}

/// Square root of [`variance`].
///
/// Stays finite even when the variance itself overflows `f64`.
#[must_use]
pub fn standard_deviation(sample: &Sample) -> f64 {
    if sample.is_constant() {
        return 0.0;
    }
    let moments = ScaledMoments::new(sample);
    moments.scale * moments.second.sqrt()
}

/// Fisher's population skewness: third central moment over `σ³`.
///
/// # Errors
///
/// Returns [`DegenerateSkewnessError`] when the standard deviation is zero.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::{descriptive, sample::Sample};
/// let symmetric = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(descriptive::skewness(&symmetric), Ok(0.0));
///
/// let flat = Sample::new(vec![4.0, 4.0]).unwrap();
/// assert!(descriptive::skewness(&flat).is_err());
/// ```
pub fn skewness(sample: &Sample) -> Result<f64, DegenerateSkewnessError> {
    if sample.is_constant() {
        return Err(DegenerateSkewnessError);
    }
    // Scale-free ratio, so huge or tiny magnitudes neither overflow nor underflow.
    let moments = ScaledMoments::new(sample);
    let skewness = moments.third / moments.second.powf(1.5);
    if skewness.is_finite() {
        Ok(skewness)
    } else {
        Err(DegenerateSkewnessError)
    }
}

/// Difference between the largest and smallest observation.
#[must_use]
pub fn range(sample: &Sample) -> f64 {
    sample.max() - sample.min()
}

/// Distance between the 75th and 25th percentiles.
///
/// Uses the same linear interpolation as [`percentiles::compute_percentile`].
#[must_use]
pub fn interquartile_range(sample: &Sample) -> f64 {
    let sorted = sample.sorted();
    percentiles::compute_percentile(&sorted, 75.0) - percentiles::compute_percentile(&sorted, 25.0)
}

/// Second and third central moments of the deviations divided by `scale`,
/// the largest absolute deviation from the mean.
///
/// The true moments are `scale² * second` and `scale³ * third`.
#[derive(Debug)]
struct ScaledMoments {
    scale: f64,
    second: f64,
    third: f64,
}

impl ScaledMoments {
    #[expect(clippy::cast_precision_loss)]
    fn new(sample: &Sample) -> Self {
        let values = sample.values();
        let mean = mean(sample);
        let scale = values
            .iter()
            .map(|v| (v - mean).abs())
            .fold(0.0, f64::max);
        if scale == 0.0 {
            return Self {
                scale,
                second: 0.0,
                third: 0.0,
            };
        }

        let count = values.len() as f64;
        let (second, third) = values.iter().fold((0.0, 0.0), |(second, third), v| {
            let d = (v - mean) / scale;
            (second + d * d, third + d * d * d)
        });
        Self {
            scale,
            second: second / count,
            third: third / count,
        }
    }
}

/// Descriptive statistics summarizing a sample.
///
/// Collects the central tendency and dispersion measures of this module in
/// one value so they are computed together from the same sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    /// The minimum observation.
    pub min: f64,
    /// The maximum observation.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The population variance.
    pub variance: f64,
    /// The population standard deviation.
    pub standard_deviation: f64,
    /// Fisher skewness, or `None` when the standard deviation is zero.
    pub skewness: Option<f64>,
    /// `max - min`.
    pub range: f64,
    /// `P75 - P25`.
    pub interquartile_range: f64,
}

impl DescriptiveStats {
    /// Computes every descriptive measure for `sample`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::{descriptive::DescriptiveStats, sample::Sample};
    /// let sample = Sample::new(vec![5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// let stats = DescriptiveStats::from_sample(&sample);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.range, 4.0);
    /// ```
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        Self {
            min: sample.min(),
            max: sample.max(),
            mean: mean(sample),
            variance: variance(sample),
            standard_deviation: standard_deviation(sample),
            skewness: skewness(sample).ok(),
            range: range(sample),
            interquartile_range: interquartile_range(sample),
        }
    }
}
