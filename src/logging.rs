//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;

/// Warnings and errors to stderr, so stdout carries only results.
fn fallback_config() -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

/// Initialise logging from a log4rs YAML file, or the stderr fallback when the
/// file does not exist.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        log::debug!("logging configured from {}", path.display());
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!("{} not found, logging to stderr", path.display());
    }
    Ok(())
}
