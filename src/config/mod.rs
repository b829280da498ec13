//! Configuration module for Expensify Lite
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensifyPaths;
pub use settings::{CredentialScheme, Settings};
