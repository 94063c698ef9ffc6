//! Parsing raw text into a validated numeric sample.
//!
//! A [`Sample`] is the only input accepted by the rest of this crate. It is
//! guaranteed to be non-empty and to contain only finite values whose spread
//! `max - min` is finite too, so the statistics functions never have to deal
//! with empty, NaN-polluted or overflowing data.
//!
//! # Examples
//!
//! ```
//! use freqstat_stats::sample::Sample;
//!
//! let sample = Sample::parse("abc, 5, , 7").unwrap();
//! assert_eq!(sample.values(), &[5.0, 7.0]);
//!
//! assert!(Sample::parse("abc, ,").is_err());
//! ```

use serde::Serialize;

/// Separator between observations in raw input.
pub const TOKEN_SEPARATOR: char = ',';

/// Error returned when raw input cannot produce a usable sample.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidInputError {
    #[display("input contains no valid numbers")]
    NoValidNumbers,
    #[display("value at position {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },
    #[display("spread between {min} and {max} exceeds the representable range")]
    RangeOverflow { min: f64, max: f64 },
}

/// An ordered, non-empty sequence of finite observations.
///
/// The order in which values were entered is preserved. Order-dependent
/// statistics work on a sorted copy obtained from [`Sample::sorted`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

/// Result of tokenizing raw input, before emptiness is checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTokens {
    /// Values that parsed as finite numbers, in input order.
    pub values: Vec<f64>,
    /// Number of non-blank tokens that were discarded.
    pub rejected: usize,
}

/// Splits `text` on commas and parses every token as a finite `f64`.
///
/// Tokens that do not parse, or parse to infinity or NaN, are dropped. Blank
/// tokens (for example from `"1,,2"` or a trailing comma) are dropped without
/// being counted as rejected.
///
/// # Examples
///
/// ```
/// use freqstat_stats::sample::parse_tokens;
///
/// let parsed = parse_tokens(" 1.5, x, inf, , 2");
/// assert_eq!(parsed.values, vec![1.5, 2.0]);
/// assert_eq!(parsed.rejected, 2);
/// ```
#[must_use]
pub fn parse_tokens(text: &str) -> ParsedTokens {
    let mut parsed = ParsedTokens::default();
    for token in text.split(TOKEN_SEPARATOR).map(str::trim) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => parsed.values.push(normalize_zero(value)),
            _ => parsed.rejected += 1,
        }
    }
    parsed
}

// -0.0 and 0.0 must count as the same observation.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl Sample {
    /// Builds a sample from already-parsed values.
    ///
    /// # Errors
    ///
    /// Fails on empty input, on a non-finite value, or when `max - min`
    /// overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::sample::{InvalidInputError, Sample};
    ///
    /// assert!(Sample::new(vec![3.0, 1.0]).is_ok());
    /// assert_eq!(Sample::new(vec![]), Err(InvalidInputError::NoValidNumbers));
    /// assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
    /// assert!(Sample::new(vec![-1e308, 1e308]).is_err());
    /// ```
    pub fn new(values: Vec<f64>) -> Result<Self, InvalidInputError> {
        if values.is_empty() {
            return Err(InvalidInputError::NoValidNumbers);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidInputError::NonFiniteValue { index, value });
        }
        let sample = Self {
            values: values.into_iter().map(normalize_zero).collect(),
        };
        let (min, max) = (sample.min(), sample.max());
        if !(max - min).is_finite() {
            return Err(InvalidInputError::RangeOverflow { min, max });
        }
        Ok(sample)
    }

    /// Parses comma-separated text into a sample, silently dropping garbage.
    pub fn parse(text: &str) -> Result<Self, InvalidInputError> {
        Self::new(parse_tokens(text).values)
    }

    /// Observations in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations. Always at least 1.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Returns an ascending copy of the observations.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns `true` if every observation has the same value.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        let first = self.values[0];
        self.values.iter().all(|&v| v == first)
    }
}
