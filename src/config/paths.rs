//! Path management for Expensify Lite
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSIFY_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `expensify-lite` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSIFY_DATA_DIR";

/// Manages all paths used by Expensify Lite
#[derive(Debug, Clone)]
pub struct ExpensifyPaths {
    /// Base directory for all Expensify Lite data
    base_dir: PathBuf,
}

impl ExpensifyPaths {
    /// Create a new ExpensifyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined and
    /// `EXPENSIFY_DATA_DIR` is not set.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "expensify-lite")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    ExpenseError::Config("Could not determine a data directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensifyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to users.json (identity -> secret)
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.json")
    }

    /// Get the directory holding one record file per identity
    pub fn expenses_dir(&self) -> PathBuf {
        self.base_dir.join("expenses")
    }

    /// Get the record file for an identity
    pub fn expenses_file(&self, identity: &str) -> PathBuf {
        self.expenses_dir()
            .join(format!("{}.json", encode_identity(identity)))
    }

    /// Get the directory holding the login log
    pub fn users_dir(&self) -> PathBuf {
        self.base_dir.join("users")
    }

    /// Get the path to the login log
    pub fn login_log_file(&self) -> PathBuf {
        self.users_dir().join("expensify_users.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.expenses_dir()).map_err(|e| {
            ExpenseError::Io(format!("Failed to create expenses directory: {}", e))
        })?;

        std::fs::create_dir_all(self.users_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create users directory: {}", e)))?;

        Ok(())
    }

    /// Check if Expensify Lite has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Turn an identity into a safe file stem
///
/// `@` becomes `_at_`; ASCII letters, digits, `.` and `-` are kept; every
/// other byte, `_` included, is written as `%XX`. Distinct identities always
/// get distinct stems.
pub fn encode_identity(identity: &str) -> String {
    let mut encoded = String::with_capacity(identity.len());
    for byte in identity.bytes() {
        match byte {
            b'@' => encoded.push_str("_at_"),
            b if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-') => {
                encoded.push(char::from(b))
            }
            b => encoded.push_str(&format!("%{:02X}", b)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.users_file(), temp_dir.path().join("users.json"));
        assert_eq!(paths.expenses_dir(), temp_dir.path().join("expenses"));
        assert_eq!(
            paths.login_log_file(),
            temp_dir.path().join("users").join("expensify_users.csv")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = ExpensifyPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.expenses_dir().exists());
        assert!(paths.users_dir().exists());
    }

    #[test]
    fn test_expenses_file_naming() {
        let paths = ExpensifyPaths::with_base_dir(PathBuf::from("/data"));
        assert_eq!(
            paths.expenses_file("zaina@gmail.com"),
            PathBuf::from("/data/expenses/zaina_at_gmail.com.json")
        );
    }

    #[test]
    fn test_encode_identity_escapes_separators() {
        assert_eq!(encode_identity("a@b.com"), "a_at_b.com");
        assert_eq!(encode_identity("../etc"), "..%2Fetc");
        assert_eq!(encode_identity("x y"), "x%20y");
    }

    #[test]
    fn test_encode_identity_is_one_to_one() {
        assert_eq!(encode_identity("a_at_x.com"), "a%5Fat%5Fx.com");
        assert_ne!(encode_identity("a@x.com"), encode_identity("a_at_x.com"));
        assert_ne!(encode_identity("a%40x"), encode_identity("a@x"));
    }
}
