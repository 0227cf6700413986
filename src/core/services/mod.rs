pub mod record_service;
pub mod summary_service;

pub use record_service::RecordService;
pub use summary_service::SummaryService;

use crate::domain::RecordId;
use crate::errors::StorageError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Record not found: {0}")]
    NotFound(RecordId),
}
