use std::collections::HashMap;

use serde::{ser::SerializeSeq, Serialize, Serializer};

use super::month::MonthKey;

/// Income and expense subtotals for one month.
///
/// Subtotals are 128-bit so that any number of `u64` amounts sums exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub income: u128,
    pub expense: u128,
}

impl MonthlyTotal {
    pub fn net(&self) -> i128 {
        // Both sides stay below 2^127 for any slice that fits in memory.
        let income = i128::try_from(self.income).unwrap_or(i128::MAX);
        let expense = i128::try_from(self.expense).unwrap_or(i128::MAX);
        income - expense
    }
}

/// Month key to [`MonthlyTotal`] mapping that enumerates entries in the order
/// their month was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    order: Vec<MonthKey>,
    totals: HashMap<MonthKey, MonthlyTotal>,
}

impl MonthlyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulator for `key`, appending it to the enumeration
    /// order on first sight.
    pub(crate) fn accumulator(&mut self, key: MonthKey) -> &mut MonthlyTotal {
        let order = &mut self.order;
        self.totals.entry(key).or_insert_with(|| {
            order.push(key);
            MonthlyTotal::default()
        })
    }

    pub fn get(&self, key: &MonthKey) -> Option<&MonthlyTotal> {
        self.totals.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &MonthKey> + '_ {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MonthKey, &MonthlyTotal)> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.totals.get(key).map(|total| (key, total)))
    }

    pub fn total_income(&self) -> u128 {
        self.totals.values().map(|t| t.income).sum()
    }

    pub fn total_expense(&self) -> u128 {
        self.totals.values().map(|t| t.expense).sum()
    }

    pub fn net(&self) -> i128 {
        self.totals.values().map(MonthlyTotal::net).sum()
    }
}

#[derive(Serialize)]
struct MonthlyRow<'a> {
    month: &'a MonthKey,
    income: u128,
    expense: u128,
    net: i128,
}

impl Serialize for MonthlyTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (month, total) in self.iter() {
            seq.serialize_element(&MonthlyRow {
                month,
                income: total.income,
                expense: total.expense,
                net: total.net(),
            })?;
        }
        seq.end()
    }
}

/// Everything a list view needs for one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub record_count: usize,
    pub balance: i128,
    pub monthly: MonthlyTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn accumulator_keeps_first_seen_order() {
        let mut totals = MonthlyTotals::new();
        totals.accumulator(key("2026-03")).income += 10;
        totals.accumulator(key("2026-01")).expense += 4;
        totals.accumulator(key("2026-03")).expense += 3;

        let keys: Vec<String> = totals.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["2026-03", "2026-01"]);
        assert_eq!(totals.get(&key("2026-03")).unwrap().net(), 7);
        assert_eq!(totals.net(), 3);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut a = MonthlyTotals::new();
        a.accumulator(key("2026-01"));
        a.accumulator(key("2026-02"));
        let mut b = MonthlyTotals::new();
        b.accumulator(key("2026-02"));
        b.accumulator(key("2026-01"));
        assert_ne!(a, b);
    }

    #[test]
    fn net_is_exact_beyond_the_u64_range() {
        let total = MonthlyTotal {
            income: 2 * u128::from(u64::MAX),
            expense: 1,
        };
        assert_eq!(total.net(), 2 * i128::from(u64::MAX) - 1);
        let saturated = MonthlyTotal {
            income: 0,
            expense: u128::MAX,
        };
        assert_eq!(saturated.net(), -i128::MAX);
    }

    #[test]
    fn serializes_rows_in_enumeration_order() {
        let mut totals = MonthlyTotals::new();
        totals.accumulator(key("2026-03")).income = 5;
        totals.accumulator(key("2026-02")).expense = 2;
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"month": "2026-03", "income": 5, "expense": 0, "net": 5},
                {"month": "2026-02", "income": 0, "expense": 2, "net": -2},
            ])
        );
    }
}
