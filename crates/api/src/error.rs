//! Unified error type surfaced by the helper API.
//!
//! Wraps database lookup failures and adds the checks the API performs on
//! nested records, so callers can bubble them up with consistent context.

use db_core::{ClassifiedError, DbError, ErrorSeverity, SlotKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] DbError),

    #[error("item '{item}' has no {kind} entry {index} ({len} present)")]
    ContainerIndexOutOfRange {
        item: String,
        kind: SlotKind,
        index: usize,
        len: usize,
    },

    #[error("{kind} entry {index} of item '{item}' has no filter list")]
    MissingFilter {
        item: String,
        kind: SlotKind,
        index: usize,
    },

    #[error("loyalty level {level} of trader '{trader}' is out of range ({len} defined)")]
    LoyaltyLevelOutOfRange {
        trader: String,
        level: usize,
        len: usize,
    },

    #[error("unknown currency '{0}'")]
    UnknownCurrency(String),

    #[error("quest '{quest}' has no '{lang}' locale")]
    QuestLocaleMissing { lang: String, quest: String },

    #[error("trader '{trader}' has no assort item '{assort}'")]
    UnknownAssort { trader: String, assort: String },
}

impl ClassifiedError for ApiError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ApiError::Database(err) => err.severity(),
            ApiError::MissingFilter { .. } => ErrorSeverity::Internal,
            ApiError::ContainerIndexOutOfRange { .. }
            | ApiError::LoyaltyLevelOutOfRange { .. }
            | ApiError::UnknownCurrency(_)
            | ApiError::QuestLocaleMissing { .. }
            | ApiError::UnknownAssort { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Database(err) => err.error_code(),
            ApiError::ContainerIndexOutOfRange { .. } => "API_CONTAINER_INDEX_OUT_OF_RANGE",
            ApiError::MissingFilter { .. } => "API_MISSING_FILTER",
            ApiError::LoyaltyLevelOutOfRange { .. } => "API_LOYALTY_LEVEL_OUT_OF_RANGE",
            ApiError::UnknownCurrency(_) => "API_UNKNOWN_CURRENCY",
            ApiError::QuestLocaleMissing { .. } => "API_QUEST_LOCALE_MISSING",
            ApiError::UnknownAssort { .. } => "API_UNKNOWN_ASSORT",
        }
    }
}
