//! Grouped spend totals
//!
//! Every function here works on any slice of records, whether the full ledger
//! or a search result, and sums in integer cents.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, ExpenseRecord, Money, YearMonth};

/// Spend for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of records in the group
    pub count: usize,
}

/// Spend for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
    pub count: usize,
}

/// Spend for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: Money,
    pub count: usize,
}

impl MonthlyTotal {
    /// "January 2024"
    pub fn label(&self) -> String {
        self.month.label()
    }
}

fn group_by<K, F>(records: &[ExpenseRecord], key: F) -> BTreeMap<K, (Money, usize)>
where
    K: Ord,
    F: Fn(&ExpenseRecord) -> K,
{
    let mut groups: BTreeMap<K, (Money, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(key(record)).or_insert((Money::zero(), 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }
    groups
}

/// Totals per category, ordered lexically by category name
pub fn by_category(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    group_by(records, |r| r.category.clone())
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category,
            total,
            count,
        })
        .collect()
}

/// Totals per day, oldest first
pub fn by_day(records: &[ExpenseRecord]) -> Vec<DailyTotal> {
    group_by(records, |r| r.date)
        .into_iter()
        .map(|(date, (total, count))| DailyTotal { date, total, count })
        .collect()
}

/// Totals per month, in calendar order (not label order)
pub fn by_month(records: &[ExpenseRecord]) -> Vec<MonthlyTotal> {
    group_by(records, ExpenseRecord::month)
        .into_iter()
        .map(|(month, (total, count))| MonthlyTotal {
            month,
            total,
            count,
        })
        .collect()
}

/// Sum of all amounts; zero for no records
pub fn total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}
