//! Configuration system for bookit.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `bookit.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`BOOKIT_*`)
//! 3. Project config (`bookit.yaml`, nearest one walking up)
//! 4. User config (`~/.bookit/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use bookit::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("strict dates: {}", config.reject_past_dates());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use validator::ConfigValidator;
