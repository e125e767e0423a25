//! # Logging & Tracing Infrastructure
//!
//! Configures the `tracing-subscriber` stack for the whole workspace:
//! - pretty-printed or JSON output
//! - module-level filtering via `RUST_LOG`, with a configured fallback
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! fn main() {
//!     let config = LoggingConfig::default().with_format(LogFormat::Json);
//!     init_logging(config).expect("Failed to initialize logging");
//!     tracing::info!("Application started");
//! }
//! ```

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// Line-delimited JSON for ingestion by host log pipelines.
    Json,
}

/// Logging bootstrap configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    format: LogFormat,
    /// Filter directive used when `RUST_LOG` is not set.
    default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            default_filter: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Choose the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the filter directive used when `RUST_LOG` is absent,
    /// e.g. `"info,core_sounds=debug"`.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// Install the global tracing subscriber.
///
/// Call once at startup; a second call fails because the global subscriber is
/// already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .map_err(|e| Error::Config(format!("invalid filter directive: {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.format {
        LogFormat::Pretty => builder
            .try_init()
            .map_err(|e| Error::LoggingInit(e.to_string()))?,
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| Error::LoggingInit(e.to_string()))?,
    }
    debug!(format = ?config.format, "Tracing subscriber installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.default_filter, "info");
    }

    #[test]
    fn init_is_single_shot() {
        assert!(init_logging(LoggingConfig::default()).is_ok());
        // The global subscriber is already set; a second install fails.
        assert!(init_logging(LoggingConfig::default()).is_err());
    }

    #[test]
    fn builders_override_fields() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_default_filter("debug,core_playback=trace");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.default_filter, "debug,core_playback=trace");
    }
}
