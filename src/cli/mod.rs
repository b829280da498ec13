//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod credentials;
pub mod expense;
pub mod export;
pub mod report;

pub use auth::{handle_login, handle_logout, handle_register};
pub use credentials::{open_session, CredentialArgs, Credentials};
pub use expense::{handle_add, handle_import, handle_list};
pub use export::handle_export;
pub use report::handle_report;
