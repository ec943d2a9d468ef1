//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; the accessors on [`Config`] supply the defaults.

use serde::{Deserialize, Serialize};

/// Default for [`Config::reject_past_dates`].
pub const DEFAULT_REJECT_PAST_DATES: bool = true;

/// Default listing page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest accepted listing page size.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Default lock wait in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use bookit::config::Config;
///
/// let config = Config {
///     reject_past_dates: Some(false),
///     ..Default::default()
/// };
/// assert!(!config.reject_past_dates());
/// assert_eq!(config.default_page_size(), 10);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Refuse reservations whose start or end is already in the past.
    pub reject_past_dates: Option<bool>,

    /// Page size used when a listing does not specify one.
    pub default_page_size: Option<u32>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for listing commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Effective strict past-date setting.
    #[must_use]
    pub fn reject_past_dates(&self) -> bool {
        self.reject_past_dates.unwrap_or(DEFAULT_REJECT_PAST_DATES)
    }

    /// Effective default page size.
    #[must_use]
    pub fn default_page_size(&self) -> u32 {
        self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Effective lock wait in seconds.
    #[must_use]
    pub fn maximum_lock_wait_seconds(&self) -> u64 {
        self.maximum_lock_wait_seconds
            .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS)
    }

    /// Effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether a missing database may be created.
    #[must_use]
    pub fn autoinit_enabled(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use bookit::config::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(crate::error::Error::validation(
                "output_format",
                format!("Unknown output format: {s} (expected table, json, csv or tsv)"),
            )),
        }
    }
}
