use std::fmt::{self, Write};

use freqstat_stats::{frequency::FrequencyTable, percentiles::Percentiles, summary::Summary};

use super::{
    fixed,
    labels::{ColumnLabel, Labels, Locale},
    percent, statistic_lines, value_column,
};

pub(super) fn write_summary<W>(out: &mut W, summary: &Summary, locale: Locale) -> fmt::Result
where
    W: Write,
{
    let labels = locale.labels();
    write_document_start(out, labels.title, locale)?;
    writeln!(out, "<section id=\"results\">")?;
    writeln!(out, "<h1>{}</h1>", labels.title)?;
    writeln!(
        out,
        "<p id=\"sampleSize\">{}: {}</p>",
        labels.sample_size,
        summary.sample.count()
    )?;

    writeln!(out, "<h2>{}</h2>", labels.statistics_heading)?;
    writeln!(out, "<ul>")?;
    for line in statistic_lines(summary, labels) {
        writeln!(
            out,
            "  <li><span id=\"{}\">{}</span></li>",
            line.id,
            line.described()
        )?;
    }
    writeln!(out, "</ul>")?;

    writeln!(out, "<h2>{}</h2>", labels.table_heading)?;
    writeln!(out, "<div id=\"frequencyTable\">")?;
    write_frequency_table(out, &summary.frequency_table, labels)?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")?;
    write_document_end(out)
}

pub(super) fn write_table_document<W>(
    out: &mut W,
    table: &FrequencyTable,
    locale: Locale,
) -> fmt::Result
where
    W: Write,
{
    let labels = locale.labels();
    write_document_start(out, labels.table_heading, locale)?;
    writeln!(out, "<div id=\"frequencyTable\">")?;
    write_frequency_table(out, table, labels)?;
    writeln!(out, "</div>")?;
    write_document_end(out)
}

pub(super) fn write_percentiles_document<W>(
    out: &mut W,
    percentiles: &Percentiles,
    locale: Locale,
) -> fmt::Result
where
    W: Write,
{
    let labels = locale.labels();
    write_document_start(out, labels.percentiles_heading, locale)?;
    writeln!(out, "<table id=\"percentiles\">")?;
    writeln!(
        out,
        "  <tr><th>{}</th><th>{}</th></tr>",
        labels.rank_column, labels.percentile_value_column
    )?;
    for p in percentiles.iter() {
        writeln!(
            out,
            "  <tr><td>P{}</td><td>{}</td></tr>",
            p.rank,
            fixed(p.value)
        )?;
    }
    writeln!(out, "</table>")?;
    write_document_end(out)
}

fn write_frequency_table<W>(out: &mut W, table: &FrequencyTable, labels: &Labels) -> fmt::Result
where
    W: Write,
{
    writeln!(out, "<table>")?;
    writeln!(out, "  <tr>")?;
    writeln!(out, "    <th>{}</th>", value_column(table, labels))?;
    for column in [
        &labels.frequency,
        &labels.cumulative_frequency,
        &labels.relative_frequency,
        &labels.cumulative_relative_frequency,
    ] {
        writeln!(out, "    <th>{}</th>", column_header(column))?;
    }
    writeln!(out, "  </tr>")?;

    for (label, counts) in table.labelled_counts() {
        writeln!(out, "  <tr>")?;
        writeln!(out, "    <td>{label}</td>")?;
        writeln!(out, "    <td>{}</td>", counts.frequency)?;
        writeln!(out, "    <td>{}</td>", counts.cumulative_frequency)?;
        writeln!(out, "    <td>{}</td>", percent(counts.relative_frequency))?;
        writeln!(
            out,
            "    <td>{}</td>",
            percent(counts.cumulative_relative_frequency)
        )?;
        writeln!(out, "  </tr>")?;
    }
    writeln!(out, "</table>")
}

fn column_header(column: &ColumnLabel) -> String {
    format!("{} ({}<sub>i</sub>)", column.name, column.symbol)
}

fn write_document_start<W>(out: &mut W, title: &str, locale: Locale) -> fmt::Result
where
    W: Write,
{
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"{}\">", locale.html_lang())?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")
}

fn write_document_end<W>(out: &mut W) -> fmt::Result
where
    W: Write,
{
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}
