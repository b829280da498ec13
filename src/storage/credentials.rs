//! Credential store: identities, their secrets, and their record sets
//!
//! The JSON implementation keeps `users.json` plus one
//! `expenses/<identity>.json` file per identity.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::config::paths::ExpensifyPaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

/// Opaque key-value boundary used by the authentication gate and sessions
pub trait CredentialStore {
    /// The stored secret for an identity, if registered
    fn lookup(&self, identity: &str) -> ExpenseResult<Option<String>>;

    /// Store (or replace) the secret for an identity
    fn insert(&self, identity: &str, secret: &str) -> ExpenseResult<()>;

    /// The persisted record set for an identity; empty if none
    fn load_records(&self, identity: &str) -> ExpenseResult<Vec<ExpenseRecord>>;

    /// Replace the persisted record set for an identity
    fn save_records(&self, identity: &str, records: &[ExpenseRecord]) -> ExpenseResult<()>;
}

/// Serializable users.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserData {
    users: BTreeMap<String, String>,
}

/// Serializable per-identity expense file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<ExpenseRecord>,
}

fn lock_error(e: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Flat-file JSON credential store
pub struct JsonCredentialStore {
    paths: ExpensifyPaths,
    users: RwLock<BTreeMap<String, String>>,
}

impl JsonCredentialStore {
    pub fn new(paths: ExpensifyPaths) -> Self {
        Self {
            paths,
            users: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load users.json into memory
    pub fn load(&self) -> ExpenseResult<()> {
        let file_data: UserData = read_json(self.paths.users_file())?;
        let mut users = self.users.write().map_err(lock_error)?;
        *users = file_data.users;
        tracing::debug!(count = users.len(), "loaded credential store");
        Ok(())
    }

    /// Write users.json
    pub fn save(&self) -> ExpenseResult<()> {
        let users = self.users.read().map_err(lock_error)?;
        let file_data = UserData {
            users: users.clone(),
        };
        write_json_atomic(self.paths.users_file(), &file_data)
    }

    /// Number of registered identities
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.users.read().map_err(lock_error)?.len())
    }

    fn records_path(&self, identity: &str) -> PathBuf {
        self.paths.expenses_file(identity)
    }
}

impl CredentialStore for JsonCredentialStore {
    fn lookup(&self, identity: &str) -> ExpenseResult<Option<String>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.get(identity).cloned())
    }

    fn insert(&self, identity: &str, secret: &str) -> ExpenseResult<()> {
        {
            let mut users = self.users.write().map_err(lock_error)?;
            users.insert(identity.to_string(), secret.to_string());
        }
        self.save()
    }

    fn load_records(&self, identity: &str) -> ExpenseResult<Vec<ExpenseRecord>> {
        let path = self.records_path(identity);
        let data: ExpenseData = read_json(&path)?;
        tracing::debug!(path = %path.display(), count = data.expenses.len(), "loaded records");
        Ok(data.expenses)
    }

    fn save_records(&self, identity: &str, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        let path = self.records_path(identity);
        let data = ExpenseData {
            expenses: records.to_vec(),
        };
        write_json_atomic(&path, &data)?;
        tracing::debug!(path = %path.display(), count = records.len(), "saved records");
        Ok(())
    }
}

/// In-memory credential store, for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<String, String>>,
    records: RwLock<HashMap<String, Vec<ExpenseRecord>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn lookup(&self, identity: &str) -> ExpenseResult<Option<String>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.get(identity).cloned())
    }

    fn insert(&self, identity: &str, secret: &str) -> ExpenseResult<()> {
        let mut users = self.users.write().map_err(lock_error)?;
        users.insert(identity.to_string(), secret.to_string());
        Ok(())
    }

    fn load_records(&self, identity: &str) -> ExpenseResult<Vec<ExpenseRecord>> {
        let records = self.records.read().map_err(lock_error)?;
        Ok(records.get(identity).cloned().unwrap_or_default())
    }

    fn save_records(&self, identity: &str, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        let mut stored = self.records.write().map_err(lock_error)?;
        stored.insert(identity.to_string(), records.to_vec());
        Ok(())
    }
}
