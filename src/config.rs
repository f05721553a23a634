//! Runtime configuration.
//!
//! Built once in `main` from the environment (after `.env` is loaded) and then
//! passed explicitly to the output layer.

use clap::ValueEnum;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_THOUSANDS_SEP: &str = "SUBNET_CALC_THOUSANDS_SEP";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Digit grouping character for host counts and the decimal address.
    pub thousands_separator: char,
    pub format: OutputFormat,
    pub color: bool,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            thousands_separator: ',',
            format: OutputFormat::Text,
            color: true,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any variable lookup; unset keys keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(sep) = lookup(ENV_THOUSANDS_SEP) {
            let mut chars = sep.chars();
            config.thousands_separator = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(format!(
                        "{ENV_THOUSANDS_SEP} must be a single character, got '{sep}'"
                    )
                    .into())
                }
            };
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        // Any value, even empty, disables colour (https://no-color.org).
        if lookup(ENV_NO_COLOR).is_some() {
            config.color = false;
        }

        log::trace!("config from environment: {:?}", config);
        Ok(config)
    }
}
