//! Presentation of computed statistics as HTML, plain text or JSON.
//!
//! Every scalar statistic is shown with two decimals. Relative frequencies
//! are shown as percentages with two decimals.

use freqstat_stats::{
    frequency::FrequencyTable, mode::Mode, percentiles::Percentiles, summary::Summary,
};

use self::labels::{Labels, Locale, StatisticLabel};
use crate::util::Output;

mod html;
pub mod labels;
mod text;

/// Output format of a command.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Format {
    #[default]
    Html,
    Text,
    Json,
}

pub fn write_summary(
    output: &mut Output,
    summary: &Summary,
    format: Format,
    locale: Locale,
) -> anyhow::Result<()> {
    let mut document = String::new();
    match format {
        Format::Json => return output.write_json(summary),
        Format::Html => html::write_summary(&mut document, summary, locale)?,
        Format::Text => text::write_summary(&mut document, summary, locale.labels())?,
    }
    output.write_text(&document)
}

pub fn write_table(
    output: &mut Output,
    table: &FrequencyTable,
    format: Format,
    locale: Locale,
) -> anyhow::Result<()> {
    let mut document = String::new();
    match format {
        Format::Json => return output.write_json(table),
        Format::Html => html::write_table_document(&mut document, table, locale)?,
        Format::Text => text::write_frequency_table(&mut document, table, locale.labels())?,
    }
    output.write_text(&document)
}

pub fn write_percentiles(
    output: &mut Output,
    percentiles: &Percentiles,
    format: Format,
    locale: Locale,
) -> anyhow::Result<()> {
    let mut document = String::new();
    match format {
        Format::Json => return output.write_json(percentiles),
        Format::Html => html::write_percentiles_document(&mut document, percentiles, locale)?,
        Format::Text => text::write_percentiles(&mut document, percentiles, locale.labels())?,
    }
    output.write_text(&document)
}

/// One reported statistic, ready for display.
#[derive(Debug)]
struct StatisticLine {
    /// Stable identifier, used as the HTML element id.
    id: &'static str,
    label: &'static StatisticLabel,
    value: String,
}

impl StatisticLine {
    fn new(id: &'static str, label: &'static StatisticLabel, value: String) -> Self {
        Self { id, label, value }
    }

    /// `"20.00 (Media: Promedio de los datos)"`
    fn described(&self) -> String {
        format!("{} ({}: {})", self.value, self.label.name, self.label.note)
    }
}

/// The reported statistics, in display order.
fn statistic_lines(summary: &Summary, labels: &'static Labels) -> Vec<StatisticLine> {
    let stats = &summary.statistics.descriptive;
    let percentile = |rank| {
        summary
            .percentiles
            .get(rank)
            .map_or_else(|| labels.undefined.to_owned(), fixed)
    };

    vec![
        StatisticLine::new("mean", &labels.mean, fixed(stats.mean)),
        StatisticLine::new("p50", &labels.median, percentile(50.0)),
        StatisticLine::new(
            "mode",
            &labels.mode,
            mode_text(&summary.statistics.mode, labels),
        ),
        StatisticLine::new("p10", &labels.p10, percentile(10.0)),
        StatisticLine::new("p25", &labels.p25, percentile(25.0)),
        StatisticLine::new("p75", &labels.p75, percentile(75.0)),
        StatisticLine::new("p90", &labels.p90, percentile(90.0)),
        StatisticLine::new("variance", &labels.variance, fixed(stats.variance)),
        StatisticLine::new(
            "stdDeviation",
            &labels.standard_deviation,
            fixed(stats.standard_deviation),
        ),
        StatisticLine::new(
            "fisherCoefficient",
            &labels.skewness,
            stats
                .skewness
                .map_or_else(|| labels.undefined.to_owned(), fixed),
        ),
        StatisticLine::new("range", &labels.range, fixed(stats.range)),
        StatisticLine::new(
            "iqr",
            &labels.interquartile_range,
            fixed(stats.interquartile_range),
        ),
    ]
}

fn fixed(value: f64) -> String {
    format!("{value:.2}")
}

fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

fn mode_text(mode: &Mode, labels: &Labels) -> String {
    match mode {
        Mode::NoMode => labels.no_mode.to_owned(),
        Mode::Values(_) => mode.to_string(),
    }
}

fn value_column(table: &FrequencyTable, labels: &Labels) -> &'static str {
    match table {
        FrequencyTable::Discrete(_) => labels.value_column,
        FrequencyTable::Grouped(_) => labels.interval_column,
    }
}
