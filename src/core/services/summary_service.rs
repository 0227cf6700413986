use tracing::debug;

use crate::core::aggregation;
use crate::domain::{LedgerSummary, Record};
use crate::storage::RecordSource;

use super::ServiceResult;

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(records: &[Record]) -> LedgerSummary {
        let summary = LedgerSummary {
            record_count: records.len(),
            balance: aggregation::global_balance(records),
            monthly: aggregation::monthly_totals(records),
        };
        debug!(
            records = summary.record_count,
            months = summary.monthly.len(),
            balance = summary.balance,
            "summarized records"
        );
        summary
    }

    pub fn from_source(source: &dyn RecordSource) -> ServiceResult<LedgerSummary> {
        let records = source.load()?;
        Ok(Self::summarize(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StaticRecordSource;

    #[test]
    fn sample_source_summary_matches_engine() {
        let source = StaticRecordSource::sample();
        let summary = SummaryService::from_source(&source).expect("static source loads");
        let records = source.load().unwrap();
        assert_eq!(summary.record_count, 6);
        assert_eq!(summary.balance, aggregation::global_balance(&records));
        assert_eq!(summary.monthly, aggregation::monthly_totals(&records));
        assert_eq!(summary.balance, summary.monthly.net());
    }

    #[test]
    fn empty_snapshot_summarizes_to_zero() {
        let summary = SummaryService::summarize(&[]);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.balance, 0);
        assert!(summary.monthly.is_empty());
    }
}
