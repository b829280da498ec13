//! Storage layer for Expensify Lite
//!
//! Provides the JSON credential store, the CSV login log, and atomic file
//! writes shared by both.

pub mod credentials;
pub mod file_io;
pub mod init;
pub mod login_log;

pub use credentials::{CredentialStore, JsonCredentialStore, MemoryCredentialStore};
pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use init::{initialize_storage, seed_demo_accounts};
pub use login_log::{LoginEntry, LoginLog};

use crate::config::paths::ExpensifyPaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensifyPaths,
    pub credentials: JsonCredentialStore,
    pub login_log: LoginLog,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensifyPaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            credentials: JsonCredentialStore::new(paths.clone()),
            login_log: LoginLog::new(paths.login_log_file()),
            paths,
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.credentials.load()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
