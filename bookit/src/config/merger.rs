//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use bookit::config::{Config, ConfigMerger};
///
/// let low = Config { default_page_size: Some(5), ..Default::default() };
/// let high = Config { default_page_size: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_page_size, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.reject_past_dates.is_some() {
            target.reject_past_dates = source.reject_past_dates;
        }

        if source.default_page_size.is_some() {
            target.default_page_size = source.default_page_size;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_later_sources_override() {
        let user = Config {
            reject_past_dates: Some(false),
            default_page_size: Some(5),
            ..Default::default()
        };
        let project = Config {
            default_page_size: Some(30),
            output_format: Some(OutputFormat::Tsv),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, user), source(2, project)]);
        assert_eq!(merged.reject_past_dates, Some(false));
        assert_eq!(merged.default_page_size, Some(30));
        assert_eq!(merged.output_format, Some(OutputFormat::Tsv));
    }

    #[test]
    fn test_unset_fields_do_not_clear() {
        let mut target = Config {
            disable_autoinit: Some(true),
            maximum_lock_wait_seconds: Some(9),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.disable_autoinit, Some(true));
        assert_eq!(target.maximum_lock_wait_seconds, Some(9));
    }
}
