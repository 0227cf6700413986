use crate::domain::{Identifiable, Record, RecordId};

use super::{ServiceError, ServiceResult};

/// Lookup of single records for detail views.
pub struct RecordService;

impl RecordService {
    pub fn find(records: &[Record], id: RecordId) -> Option<&Record> {
        records.iter().find(|record| record.id() == id)
    }

    pub fn require(records: &[Record], id: RecordId) -> ServiceResult<&Record> {
        Self::find(records, id).ok_or(ServiceError::NotFound(id))
    }
}
