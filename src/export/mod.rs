//! Export module for Expensify Lite
//!
//! CSV is the only export format; its header and column order are the
//! contract with spreadsheet consumers.

pub mod csv;

pub use csv::{default_export_file_name, read_csv, to_csv, write_csv, CSV_HEADER};
