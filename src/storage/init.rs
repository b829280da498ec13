//! Storage initialization
//!
//! Handles first-run setup and the optional demo accounts

use crate::config::paths::ExpensifyPaths;
use crate::config::settings::CredentialScheme;
use crate::error::ExpenseResult;
use crate::services::auth::seal_secret;

use super::credentials::CredentialStore;

/// Identities and secrets of the demo accounts
pub const DEMO_ACCOUNTS: [(&str, &str); 2] = [
    ("zaina@gmail.com", "zaina123"),
    ("test@example.com", "test123"),
];

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &ExpensifyPaths) -> ExpenseResult<()> {
    paths.ensure_directories()
}

/// Register the demo accounts that do not exist yet
///
/// Returns the identities that were created.
pub fn seed_demo_accounts<S>(store: &S, scheme: CredentialScheme) -> ExpenseResult<Vec<&'static str>>
where
    S: CredentialStore + ?Sized,
{
    let mut created = Vec::new();
    for (identity, secret) in DEMO_ACCOUNTS {
        if store.lookup(identity)?.is_some() {
            continue;
        }

        store.insert(identity, &seal_secret(scheme, secret)?)?;
        tracing::info!(identity, "seeded demo account");
        created.push(identity);
    }
    Ok(created)
}
