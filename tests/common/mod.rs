#![allow(dead_code)]

use chrono::NaiveDate;
use kakeibo::domain::{Record, RecordKind};

pub fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid ISO date")
}

pub fn record(id: u64, iso: &str, kind: RecordKind, amount: u64) -> Record {
    Record::new(id, date(iso), "misc", kind, amount)
}

/// Salary followed by groceries in February 2026.
pub fn february() -> Vec<Record> {
    vec![
        record(4, "2026-02-04", RecordKind::Credit, 300_000),
        record(1, "2026-02-01", RecordKind::Debit, 1_200),
    ]
}

/// Groceries then salary in March 2026.
pub fn march() -> Vec<Record> {
    vec![
        record(5, "2026-03-01", RecordKind::Debit, 1_500),
        record(6, "2026-03-05", RecordKind::Credit, 300_000),
    ]
}

/// Deterministic mixed ledger spanning several months, out of date order.
pub fn scrambled(count: u64) -> Vec<Record> {
    (0..count)
        .map(|idx| {
            let month = (idx * 7 % 12) as u32 + 1;
            let day = (idx % 28) as u32 + 1;
            let kind = if idx % 3 == 0 {
                RecordKind::Credit
            } else {
                RecordKind::Debit
            };
            Record::new(
                idx,
                NaiveDate::from_ymd_opt(2025 + (idx % 2) as i32, month, day).expect("valid day"),
                "generated",
                kind,
                (idx * 137) % 10_000,
            )
        })
        .collect()
}
