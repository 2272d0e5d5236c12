use super::analyzer::GcAnalyzer;
use super::archive::load_archive;
use super::config::{Command, RunConfiguration};
use super::export_tools::{write_gc_table_csv, write_scan, write_scan_file};
use super::file_tools::check_create_dir;
use super::gc_content::GcCounts;
use super::report::{format_gc_table, format_ranking, format_statistics};
use anyhow::Result;
use log::{info, warn};
use std::io::{self, Write};

/// Runs one analysis on the configured archive.
///
/// # Arguments
///
/// * `config` - The configuration for the run
/// * `command` - The analysis to run
/// * `out` - Where reports and stdout exports are written
///
/// # Returns
///
/// * `Result<()>` - Ok(()) if the analysis completed; a missing sequence
///   identifier or an invalid window size is reported as an error
pub fn run_analysis<W: Write>(
    config: RunConfiguration,
    command: Command,
    out: &mut W,
) -> Result<()> {
    config.check()?;
    let store = load_archive(
        &config.archive(),
        &config.extensions(),
        config.collision_policy(),
    )?;
    let analyzer = GcAnalyzer::new(&store).with_default_window_size(config.window_size());

    match command {
        Command::Calculate => {
            let table = analyzer.aggregate_all();
            writeln!(out, "{}", format_gc_table(&table))?;
        }
        Command::Distribution {
            id,
            window_size,
            output,
            format,
        } => {
            let scan = analyzer.scan(&id, window_size)?;
            let stored = analyzer.lookup(&id)?;
            if scan.is_empty() {
                warn!(
                    "Sequence {} ({} bases) is shorter than one window of {} bases, no samples",
                    id,
                    stored.len(),
                    scan.window_size()
                );
            }
            let counts = GcCounts::from_slice(stored.sequence());
            if counts.other > 0 {
                warn!(
                    "{} ambiguous bases of {} ignored in the GC profile",
                    counts.other, id
                );
            }
            let source = stored.source();
            if let Some(output) = output {
                let output_dir = config.output_dir();
                check_create_dir(&output_dir)?;
                write_scan_file(
                    &scan,
                    &id,
                    source,
                    format,
                    &output_dir.join(output),
                    config.overwrite_output(),
                )?;
            } else {
                write_scan(&scan, &id, source, format, out)?;
            }
        }
        Command::Stats { id, window_size } => match analyzer.summarize(&id, window_size)? {
            Some(summary) => {
                let source = analyzer.lookup(&id)?.source();
                info!("{} windows summarized", summary.windows);
                writeln!(out, "{}", format_statistics(source, &id, &summary))?;
            }
            None => {
                warn!(
                    "Sequence {} is shorter than one window of {} bases, no statistics",
                    id,
                    window_size.unwrap_or(analyzer.default_window_size())
                );
            }
        },
        Command::Export { output } => {
            let table = analyzer.aggregate_all();
            writeln!(out, "{}", format_gc_table(&table))?;
            let output_dir = config.output_dir();
            check_create_dir(&output_dir)?;
            write_gc_table_csv(&table, &output_dir.join(output), config.overwrite_output())?;
        }
        Command::Compare => {
            let table = analyzer.aggregate_all();
            writeln!(out, "GC Content Across Sequences")?;
            writeln!(out, "{}", format_ranking(&table))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Runs the analysis with reports going to stdout.
pub fn run_to_stdout(config: RunConfiguration, command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_analysis(config, command, &mut handle)
}
