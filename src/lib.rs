//! Expensify Lite - personal expense tracking
//!
//! This library provides the core of the Expensify Lite expense tracker: a
//! per-identity ledger of expense records with validation, keyword search,
//! category/daily/monthly aggregation, CSV export, and a small credential
//! gate in front of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expense records)
//! - `storage`: JSON credential store and CSV login log
//! - `services`: Ledger, authentication, sessions and the clock boundary
//! - `reports`: Aggregation engine and summary report
//! - `export`: CSV export and re-import
//! - `display`: Terminal tables and bar charts
//! - `cli`: Command handlers for the `expensify` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expensify::config::Settings;
//! use expensify::services::AuthService;
//! use expensify::storage::MemoryCredentialStore;
//!
//! let store = MemoryCredentialStore::new();
//! let auth = AuthService::new(&store, &Settings::default());
//! auth.register("a@x.com", "pw")?;
//! let session = auth.authenticate("a@x.com", "pw")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
