pub mod common;
pub mod month;
pub mod record;
pub mod summary;

pub use common::Identifiable;
pub use month::MonthKey;
pub use record::{Record, RecordId, RecordKind};
pub use summary::{LedgerSummary, MonthlyTotal, MonthlyTotals};
