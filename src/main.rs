extern crate clap;
extern crate log;
extern crate simplelog;

mod utils;

use crate::clap::Parser;
use anyhow::Result;
use log::*;
use simplelog::*;
use std::fs::File;
use utils::config::{self, RunConfiguration};
use utils::runner::run_to_stdout;

/// Main function for the program. This function parses the command
/// line arguments and then runs the requested GC analysis.
fn main() -> Result<()> {
    let args = config::Args::parse();

    let _loggers;
    let term_log = TermLogger::new(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if let Some(log_path) = &args.log_dest {
        let flog = WriteLogger::new(args.log_level, Config::default(), File::create(log_path)?);
        _loggers = CombinedLogger::init(vec![term_log, flog])?;
    } else {
        _loggers = CombinedLogger::init(vec![term_log])?;
    }

    // read config file or start with default values
    let mut config;
    if let Some(file) = &args.config_file {
        info!("Reading configuration from file: {}", file.display());
        config = RunConfiguration::from_file(file)?;
        config.fill_defaults();
    } else {
        info!("Using default configuration");
        config = RunConfiguration::fill();
    }
    // override values from the command line (if any)
    config.override_with(&args.config)?;
    debug!("{:?}", config);

    info!("Begin processing");
    run_to_stdout(config, args.command)
}
