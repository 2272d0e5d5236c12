// This is the run configuration for this particular run, which holds the parameters needed by the
// analysis. It can come from a yaml config file, from the command line, or both: values given on
// the command line take precedence over the ones in the file, and anything still unset falls back
// to the defaults.

use super::export_tools::ExportFormat;
use super::sequence_store::CollisionPolicy;
use super::types::DEFAULT_WINDOW_SIZE;
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "GC content profiling of DNA sequence archives")]
pub struct Args {
    /// yaml configuration file; command line options override its values
    #[arg(short = 'c', long)]
    pub config_file: Option<PathBuf>,
    #[command(flatten)]
    pub config: RunConfiguration,
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
    /// also write the log to this file
    #[arg(long)]
    pub log_dest: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// The analyses that can be run on the archive.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the GC content of every sequence
    Calculate,
    /// Export the windowed GC profile of one sequence, ready for plotting
    Distribution {
        id: String,
        #[arg(short, long)]
        window_size: Option<usize>,
        /// write to this file (relative to the output directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
    /// Print mean, median and standard deviation of the windowed GC content
    Stats {
        id: String,
        #[arg(short, long)]
        window_size: Option<usize>,
    },
    /// Save the GC content of every sequence as CSV
    Export {
        #[arg(short, long, default_value = "gc_results.csv")]
        output: PathBuf,
    },
    /// Rank the sequences by GC content
    Compare,
}

/// Parameters for this particular run.
///
/// - archive: directory (or single file) holding the fasta files
/// - window_size: default window for positional GC sampling
/// - extensions: file extensions recognised as fasta (a trailing .gz is always accepted)
/// - collision_policy: what to do with an identifier found twice
/// - output_dir: where exported files are written
/// - overwrite_output: if false, refuse to replace existing files
#[derive(clap::Args, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfiguration {
    #[arg(short, long)]
    pub archive: Option<PathBuf>,
    #[arg(long = "default-window-size")]
    pub window_size: Option<usize>,
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,
    #[arg(long)]
    pub collision_policy: Option<CollisionPolicy>,
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long)]
    pub overwrite_output: Option<bool>,
}

impl RunConfiguration {
    /// Reads a configuration from a yaml file. Keys left out stay unset.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open configuration file {}", path.display()))?;
        let config: Self = serde_yaml::from_reader(file)
            .with_context(|| format!("Invalid configuration file {}", path.display()))?;
        Ok(config)
    }

    /// A configuration with every value set to its default.
    pub fn fill() -> Self {
        let mut config = RunConfiguration::default();
        config.fill_defaults();
        config
    }

    /// Sets every value that is still missing to its default.
    pub fn fill_defaults(&mut self) {
        self.archive.get_or_insert_with(|| PathBuf::from("data/"));
        self.window_size.get_or_insert(DEFAULT_WINDOW_SIZE);
        self.extensions
            .get_or_insert_with(|| vec!["fasta".to_string()]);
        self.collision_policy.get_or_insert_with(CollisionPolicy::default);
        self.output_dir
            .get_or_insert_with(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        self.overwrite_output.get_or_insert(false);
    }

    /// Replaces the values that are set in `other`.
    pub fn override_with(&mut self, other: &RunConfiguration) -> Result<()> {
        if let Some(archive) = &other.archive {
            self.archive = Some(archive.clone());
        }
        if let Some(window_size) = other.window_size {
            self.window_size = Some(window_size);
        }
        if let Some(extensions) = &other.extensions {
            if extensions.is_empty() {
                return Err(anyhow!("At least one fasta extension is needed"));
            }
            self.extensions = Some(extensions.clone());
        }
        if let Some(policy) = other.collision_policy {
            self.collision_policy = Some(policy);
        }
        if let Some(output_dir) = &other.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(overwrite) = other.overwrite_output {
            self.overwrite_output = Some(overwrite);
        }
        Ok(())
    }

    /// Final check of the configuration. Logs the values in use, as a record of the run.
    pub fn check(&self) -> Result<()> {
        let archive = self.archive();
        if !archive.exists() {
            return Err(anyhow!("Sequence archive not found: {}", archive.display()));
        }
        if self.window_size() == 0 {
            return Err(anyhow!("Window size must be greater than zero"));
        }
        if self.extensions().is_empty() {
            return Err(anyhow!("At least one fasta extension is needed"));
        }
        info!("Analyzing GC content of {} with...", archive.display());
        info!("  >window size: {}", self.window_size());
        info!("  >fasta extensions: {}", self.extensions().join(", "));
        info!("  >identifier collisions: {}", self.collision_policy());
        info!("  >output directory: {}", self.output_dir().display());
        if self.overwrite_output() {
            warn!("Overwriting any existing files.")
        }
        Ok(())
    }

    pub fn archive(&self) -> PathBuf {
        self.archive.clone().unwrap_or_else(|| PathBuf::from("data/"))
    }

    pub fn window_size(&self) -> usize {
        self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE)
    }

    pub fn extensions(&self) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| vec!["fasta".to_string()])
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collision_policy.unwrap_or_default()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn overwrite_output(&self) -> bool {
        self.overwrite_output.unwrap_or(false)
    }
}
