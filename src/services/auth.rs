//! Authentication gate
//!
//! Looks identities up in the credential store and opens sessions. Secrets
//! are compared as plain strings unless the Argon2 scheme is configured.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::settings::{CredentialScheme, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::CredentialStore;

use super::ledger::{Ledger, LedgerPolicy};
use super::session::Session;

/// Outcome of a successful registration
#[derive(Debug)]
pub enum Registration {
    /// Account created and a session opened straight away
    LoggedIn(Session),
    /// Account created; the user must log in separately
    Registered { identity: String },
}

/// Prepare a secret for storage under the given scheme
pub fn seal_secret(scheme: CredentialScheme, secret: &str) -> ExpenseResult<String> {
    match scheme {
        CredentialScheme::Plaintext => Ok(secret.to_string()),
        CredentialScheme::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(secret.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| ExpenseError::Credential(format!("Failed to hash secret: {}", e)))
        }
    }
}

/// Check a submitted secret against the stored one
pub fn verify_secret(scheme: CredentialScheme, stored: &str, secret: &str) -> ExpenseResult<bool> {
    match scheme {
        CredentialScheme::Plaintext => Ok(stored == secret),
        CredentialScheme::Argon2 => {
            let hash = PasswordHash::new(stored).map_err(|e| {
                ExpenseError::Credential(format!("Stored secret is not an Argon2 hash: {}", e))
            })?;
            Ok(Argon2::default()
                .verify_password(secret.as_bytes(), &hash)
                .is_ok())
        }
    }
}

/// Service for registering identities and opening sessions
pub struct AuthService<'a, S: CredentialStore + ?Sized> {
    store: &'a S,
    scheme: CredentialScheme,
    auto_login: bool,
    policy: LedgerPolicy,
}

impl<'a, S: CredentialStore + ?Sized> AuthService<'a, S> {
    pub fn new(store: &'a S, settings: &Settings) -> Self {
        Self {
            store,
            scheme: settings.credential_scheme,
            auto_login: settings.auto_login_on_register,
            policy: LedgerPolicy::from_settings(settings),
        }
    }

    /// Verify credentials and open a session with the identity's records
    pub fn authenticate(&self, identity: &str, secret: &str) -> ExpenseResult<Session> {
        let identity = identity.trim();
        let secret = secret.trim();

        let stored = self.store.lookup(identity)?.ok_or_else(|| {
            tracing::warn!(identity, "login for unknown identity");
            ExpenseError::identity_not_found(identity)
        })?;

        if !verify_secret(self.scheme, &stored, secret)? {
            tracing::warn!(identity, "login with wrong secret");
            return Err(ExpenseError::WrongSecret {
                identity: identity.to_string(),
            });
        }

        self.open_session(identity)
    }

    /// Register a new identity
    pub fn register(&self, identity: &str, secret: &str) -> ExpenseResult<Registration> {
        let identity = identity.trim();
        let secret = secret.trim();

        if self.store.lookup(identity)?.is_some() {
            return Err(ExpenseError::AlreadyExists {
                identity: identity.to_string(),
            });
        }
        if identity.is_empty() || secret.is_empty() {
            return Err(ExpenseError::InvalidInput(
                "please enter both email and password".into(),
            ));
        }

        self.store
            .insert(identity, &seal_secret(self.scheme, secret)?)?;
        tracing::info!(identity, "registered identity");

        if self.auto_login {
            Ok(Registration::LoggedIn(self.open_session(identity)?))
        } else {
            Ok(Registration::Registered {
                identity: identity.to_string(),
            })
        }
    }

    fn open_session(&self, identity: &str) -> ExpenseResult<Session> {
        let records = self.store.load_records(identity)?;
        tracing::info!(identity, records = records.len(), "session opened");
        Ok(Session::new(identity, Ledger::from_records(self.policy, records)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money, StandardCategory};
    use crate::storage::MemoryCredentialStore;
    use chrono::NaiveDate;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_unknown_identity_not_found() {
        let store = MemoryCredentialStore::new();
        let settings = settings();
        let auth = AuthService::new(&store, &settings);

        let err = auth.authenticate("nobody@x.com", "pw").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_register_then_authenticate() {
        let store = MemoryCredentialStore::new();
        let settings = settings();
        let auth = AuthService::new(&store, &settings);

        let registration = auth.register("a@x.com", "pw").unwrap();
        assert!(matches!(
            registration,
            Registration::Registered { ref identity } if identity == "a@x.com"
        ));

        let session = auth.authenticate("a@x.com", "pw").unwrap();
        assert_eq!(session.identity(), "a@x.com");
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_wrong_secret() {
        let store = MemoryCredentialStore::new();
        let settings = settings();
        let auth = AuthService::new(&store, &settings);
        auth.register("a@x.com", "pw").unwrap();

        let err = auth.authenticate("a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, ExpenseError::WrongSecret { .. }));

        // Comparison is case-sensitive
        assert!(auth.authenticate("a@x.com", "PW").is_err());
    }

    #[test]
    fn test_register_duplicate() {
        let store = MemoryCredentialStore::new();
        let settings = settings();
        let auth = AuthService::new(&store, &settings);
        auth.register("a@x.com", "pw").unwrap();

        let err = auth.register(" a@x.com ", "other").unwrap_err();
        assert!(matches!(err, ExpenseError::AlreadyExists { .. }));
    }

    #[test]
    fn test_register_blank_input() {
        let store = MemoryCredentialStore::new();
        let settings = settings();
        let auth = AuthService::new(&store, &settings);

        assert!(matches!(
            auth.register("   ", "pw").unwrap_err(),
            ExpenseError::InvalidInput(_)
        ));
        assert!(matches!(
            auth.register("a@x.com", "  ").unwrap_err(),
            ExpenseError::InvalidInput(_)
        ));
        assert_eq!(store.lookup("a@x.com").unwrap(), None);
    }

    #[test]
    fn test_auto_login_on_register() {
        let store = MemoryCredentialStore::new();
        let settings = Settings {
            auto_login_on_register: true,
            ..Settings::default()
        };
        let auth = AuthService::new(&store, &settings);

        match auth.register("a@x.com", "pw").unwrap() {
            Registration::LoggedIn(session) => assert_eq!(session.identity(), "a@x.com"),
            other => panic!("expected a session, got {:?}", other),
        }
    }

    #[test]
    fn test_session_loads_persisted_records() {
        let store = MemoryCredentialStore::new();
        let settings = settings();
        let auth = AuthService::new(&store, &settings);
        auth.register("a@x.com", "pw").unwrap();

        let record = ExpenseRecord::new(
            "Coffee",
            Money::from_cents(450),
            StandardCategory::Food.into(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "09:00:00 AM",
        );
        store.save_records("a@x.com", &[record.clone()]).unwrap();

        let session = auth.authenticate("a@x.com", "pw").unwrap();
        assert_eq!(session.ledger().all(), &[record]);
    }

    #[test]
    fn test_argon2_scheme() {
        let store = MemoryCredentialStore::new();
        let settings = Settings {
            credential_scheme: CredentialScheme::Argon2,
            ..Settings::default()
        };
        let auth = AuthService::new(&store, &settings);
        auth.register("a@x.com", "pw").unwrap();

        let stored = store.lookup("a@x.com").unwrap().unwrap();
        assert_ne!(stored, "pw");
        assert!(stored.starts_with("$argon2"));

        assert!(auth.authenticate("a@x.com", "pw").is_ok());
        assert!(matches!(
            auth.authenticate("a@x.com", "nope").unwrap_err(),
            ExpenseError::WrongSecret { .. }
        ));
    }
}
