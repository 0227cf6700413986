use chrono::NaiveDate;

use crate::domain::Record;

use super::{RecordSource, Result};

/// In-memory record source.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    records: Vec<Record>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Built-in household sample covering February and March 2026.
    pub fn sample() -> Self {
        let day = |m: u32, d: u32| NaiveDate::from_ymd_opt(2026, m, d).unwrap_or_default();
        Self::new(vec![
            Record::debit(1, day(2, 1), "Groceries", 1_200),
            Record::debit(2, day(2, 2), "Transport", 450),
            Record::debit(3, day(2, 3), "Entertainment", 3_000),
            Record::credit(4, day(2, 4), "Salary", 300_000),
            Record::debit(5, day(3, 1), "Groceries", 1_500),
            Record::credit(6, day(3, 5), "Salary", 300_000),
        ])
    }
}

impl RecordSource for StaticRecordSource {
    fn name(&self) -> &str {
        "built-in sample"
    }

    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregation::global_balance;

    #[test]
    fn sample_balance_matches_household_sheet() {
        let records = StaticRecordSource::sample().load().unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(global_balance(&records), 593_850);
    }

    #[test]
    fn injected_records_are_returned_verbatim() {
        let record = Record::credit(
            7,
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            "Bonus",
            50_000,
        );
        let source = StaticRecordSource::new(vec![record.clone()]);
        assert_eq!(source.load().unwrap(), vec![record]);
    }
}
