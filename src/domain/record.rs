use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::Identifiable;
use super::month::MonthKey;

/// Stable integer identifier of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecordId)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

/// Direction of a record: money in or money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[serde(alias = "income", alias = "入金")]
    Credit,
    #[serde(alias = "expense", alias = "出金")]
    Debit,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Credit => "Credit",
            RecordKind::Debit => "Debit",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One financial transaction entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: RecordId,
    date: NaiveDate,
    category: String,
    kind: RecordKind,
    amount: u64,
}

impl Record {
    pub fn new(
        id: u64,
        date: NaiveDate,
        category: impl Into<String>,
        kind: RecordKind,
        amount: u64,
    ) -> Self {
        Self {
            id: RecordId(id),
            date,
            category: category.into(),
            kind,
            amount,
        }
    }

    pub fn credit(id: u64, date: NaiveDate, category: impl Into<String>, amount: u64) -> Self {
        Self::new(id, date, category, RecordKind::Credit, amount)
    }

    pub fn debit(id: u64, date: NaiveDate, category: impl Into<String>, amount: u64) -> Self {
        Self::new(id, date, category, RecordKind::Debit, amount)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Contribution of this record to the global balance.
    pub fn signed_amount(&self) -> i128 {
        let amount = i128::from(self.amount);
        match self.kind {
            RecordKind::Credit => amount,
            RecordKind::Debit => -amount,
        }
    }
}

impl Identifiable for Record {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn signed_amount_follows_kind() {
        let salary = Record::credit(4, date(2026, 2, 4), "Salary", 300_000);
        let food = Record::debit(1, date(2026, 2, 1), "Groceries", 1_200);
        assert_eq!(salary.signed_amount(), 300_000);
        assert_eq!(food.signed_amount(), -1_200);
    }

    #[test]
    fn signed_amount_is_exact_at_the_limit() {
        let huge = Record::credit(1, date(2026, 2, 4), "Windfall", u64::MAX);
        assert_eq!(huge.signed_amount(), i128::from(u64::MAX));
        let debt = Record::debit(2, date(2026, 2, 4), "Debt", u64::MAX);
        assert_eq!(debt.signed_amount(), -i128::from(u64::MAX));
    }

    #[test]
    fn kind_accepts_boundary_aliases() {
        let parsed: Vec<RecordKind> =
            serde_json::from_str(r#"["credit","debit","income","expense","入金","出金"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                RecordKind::Credit,
                RecordKind::Debit,
                RecordKind::Credit,
                RecordKind::Debit,
                RecordKind::Credit,
                RecordKind::Debit,
            ]
        );
    }

    #[test]
    fn record_id_parses_trimmed_input() {
        assert_eq!(" 42 ".parse::<RecordId>().unwrap(), RecordId(42));
        assert!("abc".parse::<RecordId>().is_err());
    }
}
