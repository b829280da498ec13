//! Expense record model
//!
//! One logged transaction: what it was for, how much, which category, and
//! when it was entered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use super::month::YearMonth;

/// A logged expense
///
/// Records are created through the ledger, which validates the note, amount
/// and category. Once appended they are never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// What the money was spent on
    pub note: String,

    /// Amount spent
    pub amount: Money,

    pub category: Category,

    /// Calendar date the record was entered (ISO-8601 in storage)
    pub date: NaiveDate,

    /// Time of day the record was entered, display only
    #[serde(default)]
    pub time: String,
}

impl ExpenseRecord {
    /// Build a record without validation
    pub fn new(
        note: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Self {
        Self {
            note: note.into(),
            amount,
            category,
            date,
            time: time.into(),
        }
    }

    /// The month this record is reported under
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Case-insensitive match of an already lowercased keyword against the note
    pub fn note_contains(&self, keyword_lower: &str) -> bool {
        self.note.to_lowercase().contains(keyword_lower)
    }
}
