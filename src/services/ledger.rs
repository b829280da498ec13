//! Append-only expense ledger
//!
//! Holds one identity's records for the lifetime of a session. Records are
//! validated on the way in and never edited, reordered, or removed.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseField, ExpenseResult};
use crate::models::{Category, CategoryMode, ExpenseRecord, Money};

/// Largest amount a single record may carry (1,000,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Validation rules applied by [`Ledger::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// Smallest accepted amount; amounts must also be above zero
    pub minimum_amount: Money,
    pub category_mode: CategoryMode,
}

impl LedgerPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            minimum_amount: settings.minimum_amount,
            category_mode: settings.category_mode,
        }
    }

    /// Check a submission and return the normalised note and category
    pub fn check(
        &self,
        note: &str,
        amount: Money,
        category: &str,
    ) -> ExpenseResult<(String, Category)> {
        let note = note.trim();
        if note.is_empty() {
            return Err(ExpenseError::validation(
                ExpenseField::Note,
                "note cannot be empty",
            ));
        }

        if !amount.is_positive() {
            return Err(ExpenseError::validation(
                ExpenseField::Amount,
                format!("amount must be greater than 0.00, got {}", amount),
            ));
        }
        if amount < self.minimum_amount {
            return Err(ExpenseError::validation(
                ExpenseField::Amount,
                format!(
                    "amount must be at least {}, got {}",
                    self.minimum_amount, amount
                ),
            ));
        }

        if amount > MAX_AMOUNT {
            return Err(ExpenseError::validation(
                ExpenseField::Amount,
                format!("amount must be at most {}, got {}", MAX_AMOUNT, amount),
            ));
        }

        let category = Category::parse(category, self.category_mode)
            .map_err(|e| ExpenseError::validation(ExpenseField::Category, e.to_string()))?;

        Ok((note.to_string(), category))
    }
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// The ordered, append-only collection of one identity's expenses
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    policy: LedgerPolicy,
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// An empty ledger
    pub fn new(policy: LedgerPolicy) -> Self {
        Self {
            policy,
            records: Vec::new(),
        }
    }

    /// A ledger holding a previously persisted record set, in stored order
    ///
    /// Persisted records are trusted as-is; the policy applies to new ones.
    pub fn from_records(policy: LedgerPolicy, records: Vec<ExpenseRecord>) -> Self {
        Self { policy, records }
    }

    /// Validate and append a record
    ///
    /// On failure the ledger is unchanged.
    pub fn add(
        &mut self,
        note: &str,
        amount: Money,
        category: &str,
        date: NaiveDate,
        time: &str,
    ) -> ExpenseResult<ExpenseRecord> {
        let (note, category) = self.policy.check(note, amount, category)?;
        let record = ExpenseRecord::new(note, amount, category, date, time);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Validate a whole batch, then append all of it
    ///
    /// Any invalid record rejects the batch and leaves the ledger unchanged.
    pub fn import(&mut self, incoming: Vec<ExpenseRecord>) -> ExpenseResult<usize> {
        let mut checked = Vec::with_capacity(incoming.len());
        for (index, record) in incoming.into_iter().enumerate() {
            let (note, category) = self
                .policy
                .check(&record.note, record.amount, record.category.as_str())
                .map_err(|e| match e {
                    ExpenseError::Validation { field, message } => ExpenseError::Validation {
                        field,
                        message: format!("record {}: {}", index + 1, message),
                    },
                    other => other,
                })?;
            checked.push(ExpenseRecord::new(
                note,
                record.amount,
                category,
                record.date,
                record.time,
            ));
        }

        let count = checked.len();
        self.records.extend(checked);
        Ok(count)
    }

    /// Records whose note contains `keyword`, ignoring case
    ///
    /// A blank keyword returns every record. Otherwise the keyword is matched
    /// as given, surrounding spaces included.
    pub fn search(&self, keyword: &str) -> Vec<ExpenseRecord> {
        if keyword.trim().is_empty() {
            return self.records.clone();
        }

        let keyword = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.note_contains(&keyword))
            .cloned()
            .collect()
    }

    /// All records in insertion order
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
