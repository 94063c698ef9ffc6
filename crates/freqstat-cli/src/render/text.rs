use std::fmt::{self, Write};

use freqstat_stats::{frequency::FrequencyTable, percentiles::Percentiles, summary::Summary};

use super::{fixed, labels::Labels, percent, statistic_lines, value_column};

const LABEL_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 8;
const RATIO_WIDTH: usize = 10;

pub(super) fn write_summary<W>(
    out: &mut W,
    summary: &Summary,
    labels: &'static Labels,
) -> fmt::Result
where
    W: Write,
{
    writeln!(out, "{}", labels.title)?;
    writeln!(out, "{}", "=".repeat(labels.title.chars().count()))?;
    writeln!(out, "{}: {}", labels.sample_size, summary.sample.count())?;
    writeln!(out)?;

    let lines = statistic_lines(summary, labels);
    let name_width = lines
        .iter()
        .map(|l| l.label.name.chars().count())
        .max()
        .unwrap_or(0);
    writeln!(out, "{}", labels.statistics_heading)?;
    for line in &lines {
        writeln!(
            out,
            "  {:<name_width$} {:>12}  ({})",
            line.label.name, line.value, line.label.note
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", labels.table_heading)?;
    write_frequency_table(out, &summary.frequency_table, labels)
}

pub(super) fn write_frequency_table<W>(
    out: &mut W,
    table: &FrequencyTable,
    labels: &Labels,
) -> fmt::Result
where
    W: Write,
{
    let label_width = table
        .labelled_counts()
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain([LABEL_WIDTH])
        .max()
        .unwrap_or(LABEL_WIDTH);

    writeln!(
        out,
        "  {:<label_width$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>RATIO_WIDTH$} {:>RATIO_WIDTH$}",
        value_column(table, labels),
        column_symbol(labels.frequency.symbol),
        column_symbol(labels.cumulative_frequency.symbol),
        column_symbol(labels.relative_frequency.symbol),
        column_symbol(labels.cumulative_relative_frequency.symbol),
    )?;
    // label + 2 counts + 2 ratios + 4 separating spaces
    let total_width = label_width + 2 * COUNT_WIDTH + 2 * RATIO_WIDTH + 4;
    writeln!(out, "  {}", "-".repeat(total_width))?;

    for (label, counts) in table.labelled_counts() {
        writeln!(
            out,
            "  {:<label_width$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>RATIO_WIDTH$} {:>RATIO_WIDTH$}",
            label,
            counts.frequency,
            counts.cumulative_frequency,
            percent(counts.relative_frequency),
            percent(counts.cumulative_relative_frequency),
        )?;
    }
    Ok(())
}

pub(super) fn write_percentiles<W>(
    out: &mut W,
    percentiles: &Percentiles,
    labels: &Labels,
) -> fmt::Result
where
    W: Write,
{
    writeln!(out, "{}", labels.percentiles_heading)?;
    writeln!(
        out,
        "  {:<12} {:>12}",
        labels.rank_column, labels.percentile_value_column
    )?;
    writeln!(out, "  {}", "-".repeat(25))?;
    for p in percentiles.iter() {
        writeln!(out, "  {:<12} {:>12}", format!("P{}", p.rank), fixed(p.value))?;
    }
    Ok(())
}

fn column_symbol(symbol: &str) -> String {
    format!("{symbol}i")
}
