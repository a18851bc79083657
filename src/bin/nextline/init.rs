//! All preliminary steps before reading files
use std::fs::OpenOptions;
use std::process::exit;

use log::{debug, info};
use simplelog::*;

use nextline::{AppResult, Settings};

use crate::args::CliOptions;
use crate::EXIT_LOGGER_ERROR;

/// Create new logger
pub fn init_log(options: &CliOptions) {
    let logger = &options.logger;

    let writable = match OpenOptions::new().append(true).create(true).open(logger) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "unable to open log file: {}, error: {}",
                logger.display(),
                e
            );
            exit(EXIT_LOGGER_ERROR);
        }
    };

    // initialize logger
    if let Err(e) = WriteLogger::init(
        options.logger_level,
        simplelog::ConfigBuilder::new()
            .set_time_format("%Y-%b-%d %H:%M:%S.%f".to_string())
            .build(),
        writable,
    ) {
        eprintln!(
            "unable to create log file: {}, error: {}",
            logger.display(),
            e
        );
        exit(EXIT_LOGGER_ERROR);
    }

    info!("=============================> options: {:?}", &options);
}

/// Load settings from file if any, then apply command line overrides
pub fn init_settings(options: &CliOptions) -> AppResult<Settings> {
    let mut settings = match &options.settings_file {
        Some(path) => Settings::from_path(path)?,
        None => Settings::default(),
    };

    if let Some(chunk_size) = &options.chunk_size {
        settings.chunk_size = chunk_size.parse()?;
    }

    settings.validate()?;
    debug!("using settings: {:?}", settings);

    Ok(settings)
}
