//! Common error infrastructure for db-core.
//!
//! Table lookups and property decoding share one error type, [`DbError`].
//! Higher layers wrap it in their own enums and classify them through
//! [`ClassifiedError`] so callers can branch on severity without matching
//! every variant.

use strum::{Display, IntoStaticStr};

/// Severity level of an error.
///
/// - **Validation**: the caller referenced something that is not in the
///   database or passed a value that does not fit the host schema
/// - **Internal**: the database itself is inconsistent (a record is shaped
///   differently than the host schema promises)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid reference or input. Retrying without changes fails again.
    Validation,

    /// Unexpected database shape. Indicates malformed host data.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for errors raised against the database.
pub trait ClassifiedError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    ///
    /// Useful for log fields and for asserting on failures in tests.
    fn error_code(&self) -> &'static str;
}

/// Database table names used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Items,
    Handbook,
    Locales,
    Traders,
    Bots,
    Locations,
}

/// Errors raised by table lookups and record edits.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A keyed record does not exist.
    #[error("{table} entry '{key}' not found")]
    NotFound { table: Table, key: String },

    /// A value written by property name does not fit the record schema.
    #[error("property '{property}' of {table} entry '{key}' rejected: {source}")]
    InvalidProperty {
        table: Table,
        key: String,
        property: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be converted to or from its JSON form.
    #[error("{table} entry '{key}' is malformed: {source}")]
    Malformed {
        table: Table,
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DbError {
    pub fn not_found(table: Table, key: impl Into<String>) -> Self {
        Self::NotFound {
            table,
            key: key.into(),
        }
    }
}

impl ClassifiedError for DbError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DbError::NotFound { .. } | DbError::InvalidProperty { .. } => {
                ErrorSeverity::Validation
            }
            DbError::Malformed { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DbError::NotFound { .. } => "DB_NOT_FOUND",
            DbError::InvalidProperty { .. } => "DB_INVALID_PROPERTY",
            DbError::Malformed { .. } => "DB_MALFORMED",
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
