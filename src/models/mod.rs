//! Core data models for Expensify Lite
//!
//! This module contains the data structures of the expense domain: amounts,
//! categories, expense records and the month key used by reports.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::{Category, CategoryMode, CategoryParseError, StandardCategory};
pub use expense::ExpenseRecord;
pub use money::{Money, MoneyParseError};
pub use month::YearMonth;
