//! Logging infrastructure for the bookit library.
//!
//! The library logs through the `log` facade. This module provides a
//! simple stderr backend with three verbosity levels.

use std::env;
use std::fmt;
use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no CLI flag sets the level.
pub const LOG_MODE_ENV: &str = "BOOKIT_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use bookit::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookit::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr backend for the `log` facade.
///
/// Records are written as `LEVEL: message`.
///
/// # Examples
///
/// ```
/// use bookit::{Logger, LogLevel};
/// use log::Level;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.allows(Level::Warn));
/// assert!(!logger.allows(Level::Info));
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether records at `level` are written.
    #[must_use]
    pub fn allows(&self, level: Level) -> bool {
        level <= self.level.filter()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.allows(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Resolves the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose wins over quiet)
/// 2. `BOOKIT_LOG_MODE` environment variable
/// 3. Default (Normal)
#[must_use]
pub fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs a [`Logger`] as the `log` backend and returns its level.
///
/// If a backend is already installed it is left in place.
///
/// # Examples
///
/// ```
/// use bookit::{init_logger, LogLevel};
///
/// let level = init_logger(false, true);
/// assert_eq!(level, LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_level(verbose, quiet);
    if log::set_logger(Box::leak(Box::new(Logger::new(level)))).is_ok() {
        log::set_max_level(level.filter());
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_filters() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.allows(Level::Error));

        let normal = Logger::default();
        assert!(normal.allows(Level::Error));
        assert!(normal.allows(Level::Warn));
        assert!(!normal.allows(Level::Info));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.allows(Level::Debug));
        assert!(!verbose.allows(Level::Trace));
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        with_env(None, || assert_eq!(resolve_level(false, false), LogLevel::Normal));
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        with_env(Some("quiet"), || {
            assert_eq!(resolve_level(true, false), LogLevel::Verbose);
            assert_eq!(resolve_level(true, true), LogLevel::Verbose);
        });
        with_env(Some("verbose"), || {
            assert_eq!(resolve_level(false, true), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_from_env() {
        with_env(Some("VERBOSE"), || {
            assert_eq!(resolve_level(false, false), LogLevel::Verbose);
        });
        with_env(Some("invalid"), || {
            assert_eq!(resolve_level(false, false), LogLevel::Normal);
        });
    }
}
