//! Pure aggregation over a snapshot of records.
//!
//! Nothing here keeps state between calls: every call folds over the borrowed
//! input and returns freshly built output.

use crate::domain::{MonthlyTotals, Record, RecordKind};

/// Net of all credits minus all debits. Empty input yields `0`.
///
/// Sums in `i128`, which holds the exact result for any slice of `u64` amounts.
pub fn global_balance(records: &[Record]) -> i128 {
    records.iter().map(Record::signed_amount).sum()
}

/// Groups records by calendar month and sums income and expense per month.
///
/// Months enumerate in first-occurrence order of the input; a month with only
/// zero-amount records still gets an entry.
pub fn monthly_totals(records: &[Record]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::new();
    for record in records {
        let bucket = totals.accumulator(record.month_key());
        match record.kind() {
            RecordKind::Credit => bucket.income += u128::from(record.amount()),
            RecordKind::Debit => bucket.expense += u128::from(record.amount()),
        }
    }
    totals
}

/// Type seam over the aggregation functions.
pub struct AggregationEngine;

impl AggregationEngine {
    pub fn global_balance(records: &[Record]) -> i128 {
        global_balance(records)
    }

    pub fn monthly_totals(records: &[Record]) -> MonthlyTotals {
        monthly_totals(records)
    }
}
