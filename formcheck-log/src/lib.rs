//! formcheck logging setup
//!
//! Library crates in this workspace emit events through `tracing`. This crate
//! installs a global subscriber configured from the environment.
//!
//! # Usage
//!
//! ```rust
//! // Reads FORMCHECK_* variables; safe to call more than once
//! formcheck_log::init();
//!
//! tracing::info!(fields = 3, "validating form");
//! ```
//!
//! # Environment Variables
//!
//! - `FORMCHECK_DEBUG=1` - Enable debug logging
//! - `FORMCHECK_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `FORMCHECK_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `FORMCHECK_LOG_TARGET=1|0` - Include the event target
//! - `FORMCHECK_LOG` - Full filter directive, overrides the level

use once_cell::sync::Lazy;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive.
pub const FILTER_ENV: &str = "FORMCHECK_LOG";

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level of events to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human readable format
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(LogError::InvalidFormat(s.to_string())),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// Filter directive could not be parsed
    #[error("Invalid filter directive: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether to include the event target
    pub target: bool,
    /// Filter directive overriding `level`
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            target: true,
            filter: None,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };

        let debug = flag("FORMCHECK_DEBUG").unwrap_or(false);

        let level = lookup("FORMCHECK_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("FORMCHECK_LOG_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Json);

        let target = flag("FORMCHECK_LOG_TARGET").unwrap_or(true);

        let filter = lookup(FILTER_ENV).filter(|s| !s.trim().is_empty());

        Self {
            debug,
            level,
            format,
            target,
            filter,
        }
    }

    /// Build the event filter for this configuration.
    pub fn env_filter(&self) -> Result<EnvFilter, LogError> {
        match &self.filter {
            Some(directive) => EnvFilter::try_new(directive)
                .map_err(|e| LogError::InvalidFilter(format!("{}: {}", directive, e))),
            None => Ok(EnvFilter::new(self.level.as_directive())),
        }
    }
}

/// Configuration read from the environment on first use.
static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

static INITIALIZED: AtomicBool = AtomicBool::new(false);

// ============================================================================
// Public API
// ============================================================================

/// Get the environment configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

/// Whether this crate has installed the global subscriber.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Install the global subscriber using environment configuration.
pub fn try_init() -> Result<(), LogError> {
    try_init_with(config())
}

/// Install the global subscriber using the given configuration.
pub fn try_init_with(config: &LogConfig) -> Result<(), LogError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.target)
        .with_writer(std::io::stderr);

    let result = match config.format {
        Format::Pretty => builder.pretty().try_init(),
        Format::Compact => builder.compact().try_init(),
        #[cfg(feature = "json")]
        Format::Json => builder.json().try_init(),
        #[cfg(not(feature = "json"))]
        Format::Json => builder.try_init(),
    };

    result.map_err(|e| LogError::Init(e.to_string()))?;
    INITIALIZED.store(true, Ordering::SeqCst);
    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}

/// Install the global subscriber, ignoring an already installed one.
pub fn init() {
    if is_initialized() {
        return;
    }
    if let Err(e) = try_init() {
        // Another subscriber owns the process; keep it
        tracing::debug!(error = %e, "logging not initialized");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert!("invalid".parse::<Level>().is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("pretty".parse::<Format>().unwrap(), Format::Pretty);
        assert_eq!("Compact".parse::<Format>().unwrap(), Format::Compact);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_debug_flag_lowers_default_level() {
        let config = LogConfig::from_lookup(lookup(&[("FORMCHECK_DEBUG", "true")]));
        assert!(config.debug);
        assert_eq!(config.level, Level::Debug);
    }

    #[test]
    fn test_explicit_level_wins_over_debug() {
        let config = LogConfig::from_lookup(lookup(&[
            ("FORMCHECK_DEBUG", "1"),
            ("FORMCHECK_LOG_LEVEL", "warn"),
            ("FORMCHECK_LOG_FORMAT", "compact"),
            ("FORMCHECK_LOG_TARGET", "0"),
        ]));
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.format, Format::Compact);
        assert!(!config.target);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = LogConfig::from_lookup(lookup(&[
            ("FORMCHECK_LOG_LEVEL", "loud"),
            ("FORMCHECK_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_filter_directive() {
        let config = LogConfig::from_lookup(lookup(&[(FILTER_ENV, "formcheck_validation=trace")]));
        assert_eq!(config.filter.as_deref(), Some("formcheck_validation=trace"));
        assert!(config.env_filter().is_ok());

        let blank = LogConfig::from_lookup(lookup(&[(FILTER_ENV, "  ")]));
        assert_eq!(blank.filter, None);
    }

    #[test]
    fn test_invalid_filter_directive() {
        let config = LogConfig {
            filter: Some("formcheck=[".to_string()),
            ..LogConfig::default()
        };
        assert!(matches!(config.env_filter(), Err(LogError::InvalidFilter(_))));
    }
}
