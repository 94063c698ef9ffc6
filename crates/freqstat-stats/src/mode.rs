use std::fmt;

use serde::Serialize;

use crate::{frequency, sample::Sample};

/// The most frequent value(s) of a sample.
///
/// When every distinct value is modal and the sample has no repeated value at
/// all, the sample is reported as having no mode.
///
/// # Examples
///
/// ```
/// use freqstat_stats::{mode::Mode, sample::Sample};
///
/// let sample = Sample::parse("1, 1, 2, 3").unwrap();
/// assert_eq!(Mode::from_sample(&sample), Mode::Values(vec![1.0]));
///
/// let sample = Sample::parse("1, 2, 3").unwrap();
/// assert_eq!(Mode::from_sample(&sample), Mode::NoMode);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "values")]
pub enum Mode {
    /// All observations are distinct.
    NoMode,
    /// Modal values in ascending order.
    Values(Vec<f64>),
}

impl Mode {
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let counts = frequency::count_values(sample);
        let max_count = counts.values().copied().max().unwrap_or(0);
        let modes: Vec<f64> = counts
            .into_iter()
            .filter(|&(_, count)| count == max_count)
            .map(|(value, _)| value.0)
            .collect();
        if modes.len() == sample.count() {
            Self::NoMode
        } else {
            Self::Values(modes)
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::NoMode => &[],
            Self::Values(values) => values,
        }
    }
}

/// Joins the modal values with `", "`. [`Mode::NoMode`] displays as an empty
/// string; callers pick their own wording for it.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
