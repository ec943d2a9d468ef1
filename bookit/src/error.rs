//! Error types for the bookit library.
//!
//! The engine reports three classified outcomes ([`Error::NotFound`],
//! [`Error::Validation`], [`Error::AccessDenied`]). Everything else is an
//! internal fault that is surfaced as-is and never swallowed.

use thiserror::Error;

/// Result type alias for operations that may fail with a bookit error.
///
/// # Examples
///
/// ```
/// use bookit::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bookit library.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced actor, resource, or reservation does not exist.
    ///
    /// Self-booking attempts are deliberately reported with this variant too.
    #[error("not found: {resource}")]
    NotFound {
        /// Description of what was not found.
        resource: String,
    },

    /// A request was well-formed but violates an engine rule.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or concept that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The actor lacks the role required for the requested operation.
    #[error("access denied: {message}")]
    AccessDenied {
        /// A description of the missing permission.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Coarse classification of an [`Error`] for outer layers.
///
/// # Examples
///
/// ```
/// use bookit::{Error, ErrorKind};
///
/// let err = Error::AccessDenied { message: "not the owner".into() };
/// assert_eq!(err.kind(), ErrorKind::AccessDenied);
/// assert_eq!(err.kind().http_status(), 403);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Something referenced does not exist.
    NotFound,
    /// A rule was violated.
    Validation,
    /// The caller lacks the required role.
    AccessDenied,
    /// Unclassified internal failure.
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code conventionally used for this kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Validation => 400,
            Self::AccessDenied => 403,
            Self::Internal => 500,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Shorthand for a [`Error::NotFound`] error.
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a [`Error::Validation`] error.
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::AccessDenied`] error.
    pub(crate) fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::UnsupportedSchemaVersion { .. } => ErrorKind::Internal,
        }
    }

    /// Check if error indicates a missing entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookit::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 7".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a rule violation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error is an authorization failure.
    #[must_use]
    pub const fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Check if the database reported lock contention.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ErrorCode::DatabaseLocked
        )
    }
}
