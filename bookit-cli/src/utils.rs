//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, timestamp handling,
//! and dry-run reporting.

use crate::error::CliError;
use bookit::database::{resolve_data_dir, DATABASE_FILE_NAME};
use bookit::{Config, ConfigBuilder, Database, DatabaseConfig, OperationPlan};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose is consumed by init_logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory from global options.
///
/// Priority: `--data-dir` (or `BOOKIT_DATA_DIR` through clap) > `~/.bookit`.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project `bookit.yaml`
/// 3. User `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = ConfigBuilder::new()
        .with_data_dir(data_dir(global)?)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(config)
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = data_dir(global)?.join(DATABASE_FILE_NAME);

    if !db_path.exists() && (global.disable_autoinit || !config.autoinit_enabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let timeout_seconds = match global.busy_timeout {
        Some(seconds) => u64::from(seconds),
        None => config.maximum_lock_wait_seconds(),
    };
    let db_config =
        DatabaseConfig::new(db_path).with_busy_timeout(Duration::from_secs(timeout_seconds));

    Database::open(db_config).map_err(CliError::from)
}

/// The invocation's reference instant, truncated to stored precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Parse an RFC 3339 timestamp argument into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp such as 2030-01-01T09:00:00Z ({e})"))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Report what a plan would do without executing it.
pub fn print_dry_run(plan: &OperationPlan, global: &GlobalOptions) {
    if global.quiet {
        return;
    }
    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in plan.actions.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, action.description());
    }
    if !plan.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &plan.warnings {
            eprintln!("  - {warning}");
        }
    }
}
