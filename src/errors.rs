use thiserror::Error;

use crate::domain::RecordId;

/// Rejections raised while turning raw input into typed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid month key `{0}` (expected YYYY-MM)")]
    InvalidMonthKey(String),
    #[error("Record {id} has a negative amount ({amount})")]
    NegativeAmount { id: RecordId, amount: i128 },
    #[error("Record {id} has an amount above {max} ({amount})", max = u64::MAX)]
    AmountTooLarge { id: RecordId, amount: i128 },
    #[error("Duplicate record id {0}")]
    DuplicateId(RecordId),
}

/// Error type that captures record source failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
