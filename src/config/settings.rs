//! User settings for Expensify Lite
//!
//! Manages validation thresholds, category mode, display formats, the civil
//! UTC offset used to stamp records, and how credentials are stored.

use chrono::format::{Item, StrftimeItems};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::paths::ExpensifyPaths;
use crate::error::ExpenseError;
use crate::models::{CategoryMode, Money};

/// How secrets are kept in the credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialScheme {
    /// Stored and compared as plain strings (default)
    #[default]
    Plaintext,
    /// Stored as an Argon2id PHC hash string
    Argon2,
}

/// User settings for Expensify Lite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Smallest accepted expense amount
    #[serde(default = "default_minimum_amount")]
    pub minimum_amount: Money,

    /// Whether categories are restricted to the standard set
    #[serde(default)]
    pub category_mode: CategoryMode,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Civil UTC offset used to stamp records, in minutes
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Time-of-day format stored on records (strftime format)
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_display_format")]
    pub date_display_format: String,

    #[serde(default)]
    pub credential_scheme: CredentialScheme,

    /// Start a session straight after registering
    #[serde(default)]
    pub auto_login_on_register: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_minimum_amount() -> Money {
    Money::from_cents(100)
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_utc_offset_minutes() -> i32 {
    330 // India Standard Time
}

fn default_time_format() -> String {
    "%I:%M:%S %p".to_string()
}

fn default_date_display_format() -> String {
    "%d-%m-%Y".to_string()
}

fn check_format(name: &str, format: &str) -> Result<(), ExpenseError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ExpenseError::Config(format!(
            "{} is not a valid strftime format: '{}'",
            name, format
        )));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            minimum_amount: default_minimum_amount(),
            category_mode: CategoryMode::default(),
            currency_symbol: default_currency(),
            utc_offset_minutes: default_utc_offset_minutes(),
            time_format: default_time_format(),
            date_display_format: default_date_display_format(),
            credential_scheme: CredentialScheme::default(),
            auto_login_on_register: false,
        }
    }
}

impl Settings {
    /// The configured civil offset
    pub fn utc_offset(&self) -> Result<FixedOffset, ExpenseError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ExpenseError::Config(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }

    /// Reject values that would fail later, at formatting time
    pub fn validate(&self) -> Result<(), ExpenseError> {
        self.utc_offset()?;
        check_format("time_format", &self.time_format)?;
        check_format("date_display_format", &self.date_display_format)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensifyPaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensifyPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
