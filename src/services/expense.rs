//! Expense service
//!
//! Stamps new records with the clock, appends them through the session's
//! ledger, and persists the updated record set.

use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, Money};
use crate::storage::CredentialStore;

use super::clock::Clock;
use super::session::Session;

/// Service for adding expenses to a session
pub struct ExpenseService<'a, S, C>
where
    S: CredentialStore + ?Sized,
    C: Clock + ?Sized,
{
    store: &'a S,
    clock: &'a C,
}

impl<'a, S, C> ExpenseService<'a, S, C>
where
    S: CredentialStore + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(store: &'a S, clock: &'a C) -> Self {
        Self { store, clock }
    }

    /// Add an expense stamped with the current time and persist the ledger
    pub fn add(
        &self,
        session: &mut Session,
        note: &str,
        amount: Money,
        category: &str,
    ) -> ExpenseResult<ExpenseRecord> {
        let now = self.clock.now();
        let record = session
            .ledger_mut()
            .add(note, amount, category, now.date, &now.time)?;

        self.store
            .save_records(session.identity(), session.ledger().all())?;

        tracing::info!(
            identity = session.identity(),
            amount = %record.amount,
            category = %record.category,
            "expense added"
        );
        Ok(record)
    }

    /// Append a batch of existing records and persist once
    pub fn import(&self, session: &mut Session, records: Vec<ExpenseRecord>) -> ExpenseResult<usize> {
        let count = session.ledger_mut().import(records)?;
        self.store
            .save_records(session.identity(), session.ledger().all())?;

        tracing::info!(identity = session.identity(), count, "expenses imported");
        Ok(count)
    }
}
