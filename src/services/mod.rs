//! Business logic layer for Expensify Lite
//!
//! The ledger and session hold per-identity state; the auth and expense
//! services connect them to the credential store and the clock.

pub mod auth;
pub mod clock;
pub mod expense;
pub mod ledger;
pub mod session;

pub use auth::{AuthService, Registration};
pub use clock::{Clock, FixedClock, OffsetClock, Timestamp};
pub use expense::ExpenseService;
pub use ledger::{Ledger, LedgerPolicy};
pub use session::Session;
