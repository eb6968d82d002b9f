//! Logging bootstrap built on `tracing` and `tracing-subscriber`.
//!
//! Logging is configured explicitly: the binary builds a [`LogConfig`]
//! (from CLI verbosity or a JSON file) and calls [`init_logging`] once at
//! startup. Events of this crate are filtered under [`LOG_TARGET`].

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{KohlrahbiError, Result};

/// Name of the application logger.
pub const LOG_TARGET: &str = "kohlrahbi";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Level applied to this crate's events.
    #[serde(with = "level_name")]
    pub level: Level,
    pub format: LogFormat,
    /// Whether to include the event target in the output.
    pub with_target: bool,
    pub with_ansi: bool,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::default(),
            with_target: false,
            with_ansi: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// - 0: info
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Loads the configuration from a JSON file. Omitted keys keep their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|error| {
            KohlrahbiError::Logging(format!("cannot read {}: {error}", path.display()))
        })?;
        serde_json::from_str(&source).map_err(|error| {
            KohlrahbiError::Logging(format!("invalid config {}: {error}", path.display()))
        })
    }
}

/// Installs the global subscriber. Fails when a subscriber is already set
/// or the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_env_filter(config.level);

    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| {
                    KohlrahbiError::Logging(format!("cannot open {}: {error}", path.display()))
                })?;
            // The file has no terminal attached.
            let config = LogConfig {
                with_ansi: false,
                ..config.clone()
            };
            install(&config, filter, Arc::new(file))
        }
        None => install(config, filter, std::io::stderr),
    };

    result.map_err(|error| KohlrahbiError::Logging(error.to_string()))
}

fn install<W>(
    config: &LogConfig,
    filter: EnvFilter,
    writer: W,
) -> std::result::Result<(), tracing_subscriber::util::TryInitError>
where
    W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target)
                    .without_time(),
            )
            .try_init(),
    }
}

/// `RUST_LOG` takes precedence; otherwise other crates stay at warn.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{LOG_TARGET}={}",
            level.as_str().to_lowercase()
        ))
    })
}

mod level_name {
    use serde::{Deserialize, Deserializer};
    use tracing::Level;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5).level, Level::TRACE);
    }

    #[test]
    fn config_parses_partial_json() {
        let config: LogConfig =
            serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).expect("config");
        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.with_ansi);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn config_rejects_unknown_level() {
        let parsed = serde_json::from_str::<LogConfig>(r#"{"level": "loud"}"#);
        assert!(parsed.is_err());
    }
}
