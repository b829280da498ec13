//! Authenticated session
//!
//! Binds one identity to its in-memory ledger for the duration of use.

use super::ledger::Ledger;

/// One identity's active session
#[derive(Debug)]
pub struct Session {
    identity: String,
    ledger: Ledger,
}

impl Session {
    pub fn new(identity: impl Into<String>, ledger: Ledger) -> Self {
        Self {
            identity: identity.into(),
            ledger,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// End the session, discarding the in-memory ledger
    ///
    /// Persisted records are untouched. Returns the identity that logged out.
    pub fn logout(self) -> String {
        tracing::info!(identity = %self.identity, records = self.ledger.len(), "logged out");
        self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::ledger::LedgerPolicy;
    use chrono::NaiveDate;

    #[test]
    fn test_session_owns_ledger() {
        let mut session = Session::new("a@x.com", Ledger::new(LedgerPolicy::default()));
        session
            .ledger_mut()
            .add(
                "Lunch",
                Money::from_cents(25_000),
                "Food",
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "01:00:00 PM",
            )
            .unwrap();

        assert_eq!(session.identity(), "a@x.com");
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.logout(), "a@x.com");
    }
}
