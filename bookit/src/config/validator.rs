//! Configuration validation.

use crate::config::schema::{Config, MAX_PAGE_SIZE};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use bookit::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { default_page_size: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(size) = config.default_page_size {
            Self::validate_page_size(size)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate a page size.
    ///
    /// # Errors
    ///
    /// Returns an error unless `1 <= size <= 1000`.
    pub fn validate_page_size(size: u32) -> Result<()> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(Error::Validation {
                field: "default_page_size".into(),
                message: format!("Page size must be between 1 and {MAX_PAGE_SIZE}, got {size}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_bounds() {
        assert!(ConfigValidator::validate_page_size(0).is_err());
        assert!(ConfigValidator::validate_page_size(1).is_ok());
        assert!(ConfigValidator::validate_page_size(MAX_PAGE_SIZE).is_ok());
        assert!(ConfigValidator::validate_page_size(MAX_PAGE_SIZE + 1).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            maximum_lock_wait_seconds: Some(0),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("maximum_lock_wait_seconds"));
    }

    #[test]
    fn test_full_valid_config() {
        let config = Config {
            reject_past_dates: Some(false),
            default_page_size: Some(100),
            maximum_lock_wait_seconds: Some(30),
            output_format: None,
            disable_autoinit: Some(true),
        };
        ConfigValidator::validate(&config).unwrap();
    }
}
