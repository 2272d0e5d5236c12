// Human readable renderings of the analysis results. These only build
// strings; the runner decides where they go.

use super::aggregator::{GcRecord, GcResultTable};
use super::gc_statistics::StatisticsSummary;
use itertools::Itertools;

pub fn format_gc_line(record: &GcRecord) -> String {
    format!(
        "{} {}: GC Content = {:.2}%",
        record.source, record.id, record.gc
    )
}

/// One line per sequence, in table order.
pub fn format_gc_table(table: &GcResultTable) -> String {
    table.records().iter().map(format_gc_line).join("\n")
}

pub fn format_statistics(source: &str, id: &str, summary: &StatisticsSummary) -> String {
    format!(
        "GC Statistics for {} {}:\n\
         Mean GC: {:.2}%\n\
         Median GC: {:.2}%\n\
         Standard Deviation: {:.2}%",
        source, id, summary.mean, summary.median, summary.std_dev
    )
}

/// Sequences ranked by descending GC content, with a text bar per row.
pub fn format_ranking(table: &GcResultTable) -> String {
    let ranked = table.ranked();
    let width = ranked.iter().map(|r| r.id.len()).max().unwrap_or(0);
    ranked
        .iter()
        .enumerate()
        .map(|(rank, record)| {
            // one mark per 2%
            let bar = "#".repeat((record.gc / 2.0).round() as usize);
            format!(
                "{:>3}. {:<width$} {:>6.2}% {}",
                rank + 1,
                record.id,
                record.gc,
                bar,
                width = width
            )
        })
        .join("\n")
}
