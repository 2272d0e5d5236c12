// Writes GC results as CSV (and window profiles as CSV or JSON) for
// spreadsheets and plotting tools.

use super::aggregator::GcResultTable;
use super::file_tools::open_file;
use super::windowed_scan::{WindowSample, WindowedScan};
use anyhow::Result;
use log::info;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::{Display, EnumString};

/// Output format for window profiles.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Writes one row per sequence: source file, identifier, GC percentage with
/// two decimals. Rows follow the table order.
pub fn write_gc_table<W: Write>(table: &GcResultTable, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["File Name", "Sequence ID", "GC Content (%)"])?;
    for record in table.records() {
        let gc = format!("{:.2}", record.gc);
        writer.write_record([&record.source, &record.id, &gc])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the GC table to `filename` as CSV.
///
/// Errors if the file exists and `overwrite_output` is false.
pub fn write_gc_table_csv(
    table: &GcResultTable,
    filename: &Path,
    overwrite_output: bool,
) -> Result<()> {
    let mut outfile = BufWriter::new(open_file(filename, overwrite_output)?);
    write_gc_table(table, &mut outfile)?;
    outfile.flush()?;
    info!("Results saved to {}", filename.display());
    Ok(())
}

#[derive(Serialize)]
struct ScanDocument<'a> {
    identifier: &'a str,
    source: &'a str,
    window_size: usize,
    samples: &'a [WindowSample],
}

/// Writes a window profile as (position, GC%) pairs in position order.
pub fn write_scan<W: Write>(
    scan: &WindowedScan,
    id: &str,
    source: &str,
    format: ExportFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["Position", "GC Content (%)"])?;
            for sample in scan.samples() {
                writer.write_record([sample.start.to_string(), format!("{:.2}", sample.gc)])?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            let document = ScanDocument {
                identifier: id,
                source,
                window_size: scan.window_size(),
                samples: scan.samples(),
            };
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes a window profile to `filename`.
pub fn write_scan_file(
    scan: &WindowedScan,
    id: &str,
    source: &str,
    format: ExportFormat,
    filename: &Path,
    overwrite_output: bool,
) -> Result<()> {
    let mut outfile = BufWriter::new(open_file(filename, overwrite_output)?);
    write_scan(scan, id, source, format, &mut outfile)?;
    outfile.flush()?;
    info!("GC profile of {} saved to {}", id, filename.display());
    Ok(())
}
