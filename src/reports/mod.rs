//! Reports module for Expensify Lite
//!
//! The aggregation engine (category, daily and monthly totals) and the
//! summary report built from it.

pub mod aggregate;
pub mod summary;

pub use aggregate::{
    by_category, by_day, by_month, total, CategoryTotal, DailyTotal, MonthlyTotal,
};
pub use summary::ExpenseReport;
