//! Login log
//!
//! Keeps one CSV row per identity describing its most recent login. A new
//! login replaces the identity's previous row and moves it to the end.

use std::fs::File;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::write_bytes_atomic;

/// One row of the login log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEntry {
    #[serde(rename = "Email")]
    pub email: String,

    /// "YYYY-MM-DD hh:mm:ss AM"
    #[serde(rename = "Login Time")]
    pub login_time: String,

    /// Number of records in the ledger at login
    #[serde(rename = "Total Expenses")]
    pub total_expenses: usize,

    /// "YYYY-MM-DD"
    #[serde(rename = "Last Updated")]
    pub last_updated: String,
}

/// CSV-backed login log
pub struct LoginLog {
    path: PathBuf,
}

impl LoginLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read all rows, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<LoginEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open login log: {}", e)))?;

        let mut reader = csv::Reader::from_reader(file);
        let mut entries = Vec::new();
        for (line, row) in reader.deserialize().enumerate() {
            let entry: LoginEntry = row.map_err(|e| {
                ExpenseError::Csv(format!("Failed to parse login log row {}: {}", line + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Record a login, replacing any earlier row for the same email
    pub fn record(&self, entry: LoginEntry) -> ExpenseResult<()> {
        let mut entries = self.read_all()?;
        entries.retain(|e| e.email != entry.email);
        entries.push(entry);

        let mut writer = csv::Writer::from_writer(Vec::new());
        for e in &entries {
            writer.serialize(e)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ExpenseError::Csv(format!("Failed to finish login log: {}", e)))?;

        write_bytes_atomic(&self.path, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(email: &str, time: &str, total: usize) -> LoginEntry {
        LoginEntry {
            email: email.to_string(),
            login_time: time.to_string(),
            total_expenses: total,
            last_updated: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_empty_log() {
        let temp_dir = TempDir::new().unwrap();
        let log = LoginLog::new(temp_dir.path().join("users").join("expensify_users.csv"));
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_header_and_row() {
        let temp_dir = TempDir::new().unwrap();
        let log = LoginLog::new(temp_dir.path().join("log.csv"));

        log.record(entry("a@x.com", "2024-03-01 09:00:00 AM", 2)).unwrap();

        let text = std::fs::read_to_string(log.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Email,Login Time,Total Expenses,Last Updated"));
        assert_eq!(lines.next(), Some("a@x.com,2024-03-01 09:00:00 AM,2,2024-03-01"));
    }

    #[test]
    fn test_login_replaces_previous_row() {
        let temp_dir = TempDir::new().unwrap();
        let log = LoginLog::new(temp_dir.path().join("log.csv"));

        log.record(entry("a@x.com", "2024-03-01 09:00:00 AM", 0)).unwrap();
        log.record(entry("b@x.com", "2024-03-01 10:00:00 AM", 1)).unwrap();
        log.record(entry("a@x.com", "2024-03-02 08:30:00 PM", 3)).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].email, "b@x.com");
        assert_eq!(entries[1].email, "a@x.com");
        assert_eq!(entries[1].total_expenses, 3);
    }
}
