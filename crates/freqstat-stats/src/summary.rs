use serde::Serialize;

use crate::{
    descriptive::DescriptiveStats,
    frequency::FrequencyTable,
    mode::Mode,
    percentiles::Percentiles,
    sample::{InvalidInputError, Sample},
};

/// Scalar summary values of a sample, computed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsBundle {
    #[serde(flatten)]
    pub descriptive: DescriptiveStats,
    pub mode: Mode,
}

/// Computes the [`StatisticsBundle`] of a sample.
///
/// # Examples
///
/// ```
/// use freqstat_stats::{sample::Sample, summary::compute_statistics};
///
/// let sample = Sample::parse("10, 20, 20, 30").unwrap();
/// let stats = compute_statistics(&sample);
/// assert_eq!(stats.descriptive.mean, 20.0);
/// assert_eq!(stats.descriptive.variance, 50.0);
/// assert_eq!(stats.mode.to_string(), "20");
/// ```
#[must_use]
pub fn compute_statistics(sample: &Sample) -> StatisticsBundle {
    StatisticsBundle {
        descriptive: DescriptiveStats::from_sample(sample),
        mode: Mode::from_sample(sample),
    }
}

/// Everything a presentation layer needs to render a sample.
///
/// Combines:
/// - the sample itself, in input order
/// - the [`StatisticsBundle`]
/// - the standard percentile set (10, 25, 50, 75, 90)
/// - the discrete or grouped frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub sample: Sample,
    pub statistics: StatisticsBundle,
    pub percentiles: Percentiles,
    pub frequency_table: FrequencyTable,
}

impl Summary {
    /// Computes the full summary of `sample`.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::{frequency::TableKind, sample::Sample, summary::Summary};
    ///
    /// let sample = Sample::parse("5, 1, 3").unwrap();
    /// let summary = Summary::compute(&sample);
    /// assert_eq!(summary.percentiles.median(), Some(3.0));
    /// assert_eq!(summary.frequency_table.kind(), TableKind::Discrete);
    /// ```
    #[must_use]
    pub fn compute(sample: &Sample) -> Self {
        Self {
            sample: sample.clone(),
            statistics: compute_statistics(sample),
            percentiles: Percentiles::standard(sample),
            frequency_table: FrequencyTable::build(sample),
        }
    }
}

/// Parses raw comma-separated text and summarizes it.
///
/// # Errors
///
/// Returns [`InvalidInputError`] when the text contains no valid numbers or
/// their spread overflows `f64`; no statistics are computed in that case.
pub fn summarize(text: &str) -> Result<Summary, InvalidInputError> {
    let sample = Sample::parse(text)?;
    Ok(Summary::compute(&sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::TableKind;

    #[test]
    fn test_end_to_end_example() {
        let summary = summarize("10, 20, 20, 30").unwrap();
        assert_eq!(summary.sample.values(), &[10.0, 20.0, 20.0, 30.0]);

        let stats = &summary.statistics.descriptive;
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.variance, 50.0);
        assert!((stats.standard_deviation - 7.07).abs() < 0.01);
        assert_eq!(stats.range, 20.0);
        assert_eq!(summary.statistics.mode, Mode::Values(vec![20.0]));

        let FrequencyTable::Discrete(rows) = &summary.frequency_table else {
            panic!("expected discrete table");
        };
        let cumulative: Vec<_> = rows.iter().map(|r| r.counts.cumulative_frequency).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(cumulative, vec![1, 3, 4]);
    }

    #[test]
    fn test_invalid_input_computes_nothing() {
        assert_eq!(summarize("abc, ,"), Err(InvalidInputError::NoValidNumbers));
    }

    #[test]
    fn test_large_sample_uses_grouped_table() {
        let text = (1..=30).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let summary = summarize(&text).unwrap();
        assert_eq!(summary.frequency_table.kind(), TableKind::Grouped);
        assert_eq!(summary.frequency_table.total_frequency(), 30);
    }

    #[test]
    fn test_iqr_matches_percentile_set() {
        let summary = summarize("3, 8, 1, 9, 4, 7, 2").unwrap();
        let p25 = summary.percentiles.get(25.0).unwrap();
        let p75 = summary.percentiles.get(75.0).unwrap();
        assert!((summary.statistics.descriptive.interquartile_range - (p75 - p25)).abs() < 1e-12);
    }

    #[test]
    fn test_serialized_bundle_shape() {
        let summary = summarize("4, 4, 4").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["sample"], serde_json::json!([4.0, 4.0, 4.0]));
        assert_eq!(json["statistics"]["mean"], 4.0);
        assert!(json["statistics"]["skewness"].is_null());
        assert_eq!(json["statistics"]["mode"]["kind"], "values");
        assert_eq!(json["percentiles"][2]["rank"], 50.0);
        assert_eq!(json["frequencyTable"]["kind"], "discrete");
    }
}
