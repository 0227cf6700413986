pub mod json_source;
pub mod static_source;

use crate::{domain::Record, errors::StorageError};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Provider of the record snapshot handed to the aggregation engine.
///
/// Each `load` returns an owned, validated snapshot; sources are read-only.
pub trait RecordSource: Send + Sync {
    /// Short label used in logs and page footers.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<Record>>;
}

pub use json_source::JsonRecordSource;
pub use static_source::StaticRecordSource;
