//! Descriptive statistics for a single sample of numeric observations.
//!
//! This crate provides:
//!
//! - **Sample parsing**: Turn comma-separated text into a validated sample
//! - **Descriptive statistics**: Mean, population variance, standard deviation, Fisher skewness, range, IQR
//! - **Percentiles**: Linear-interpolated percentiles (10, 25, 50, 75, 90 by default)
//! - **Frequency tables**: Discrete tables for small samples, Sturges' rule classes for larger ones
//! - **Mode**: Most frequent value(s), with a "no mode" case for all-distinct samples
//! - **Summary**: All of the above combined into one serializable bundle
//!
//! # Modules
//!
//! - [`sample`]: Parsing and validation of raw input
//! - [`descriptive`]: Moment-based and spread statistics
//! - [`percentiles`]: Percentile computation and lookup
//! - [`frequency`]: Discrete and grouped frequency distributions
//! - [`mode`]: Mode finding
//! - [`summary`]: The combined statistics bundle
//!
//! # Examples
//!
//! ## Summarizing raw input
//!
//! ```
//! use freqstat_stats::summary;
//!
//! let summary = summary::summarize("10, 20, 20, 30").unwrap();
//! assert_eq!(summary.statistics.descriptive.mean, 20.0);
//! assert_eq!(summary.frequency_table.len(), 3);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use freqstat_stats::{percentiles::Percentiles, sample::Sample};
//!
//! let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let percentiles = Percentiles::new(&sample, &[50.0]);
//! assert_eq!(percentiles.get(50.0), Some(2.5));
//! ```

pub mod descriptive;
pub mod frequency;
pub mod mode;
pub mod percentiles;
pub mod sample;
pub mod summary;
