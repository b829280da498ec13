//! Register, login and logout commands

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::services::{AuthService, Clock, OffsetClock, Registration};
use crate::storage::{LoginEntry, Storage};

use super::credentials::{open_session, CredentialArgs};

/// Register a new identity
pub fn handle_register(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
) -> ExpenseResult<()> {
    let credentials = args.resolve()?;
    let service = AuthService::new(&storage.credentials, settings);

    match service.register(&credentials.identity, &credentials.secret)? {
        Registration::LoggedIn(session) => {
            println!("Account created! Welcome, {}", session.identity());
        }
        Registration::Registered { identity } => {
            println!("Account created for {}! Please login now.", identity);
        }
    }

    Ok(())
}

/// Verify credentials and record the login
pub fn handle_login(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
) -> ExpenseResult<()> {
    let session = open_session(storage, settings, args)?;
    let now = OffsetClock::from_settings(settings)?.now();

    storage.login_log.record(LoginEntry {
        email: session.identity().to_string(),
        login_time: now.date_time(),
        total_expenses: session.ledger().len(),
        last_updated: now.date.format("%Y-%m-%d").to_string(),
    })?;

    println!("Welcome, {}", session.identity());
    println!("  Expenses on record: {}", session.ledger().len());
    Ok(())
}

/// End the session for this invocation
///
/// Nothing persisted is removed.
pub fn handle_logout(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
) -> ExpenseResult<()> {
    let session = open_session(storage, settings, args)?;
    let identity = session.logout();
    println!("Logged out {}", identity);
    Ok(())
}
