//! Display formatting for terminal output
//!
//! Tables of expense records and text bar charts for the spend summaries.

pub mod chart;
pub mod expense;

pub use chart::{format_bar_chart, DEFAULT_BAR_WIDTH};
pub use expense::format_expense_table;
