//! Expense summary report
//!
//! Bundles the grand total and the category, daily and monthly breakdowns
//! for one view of the ledger.

use crate::display::chart::{format_bar_chart, DEFAULT_BAR_WIDTH};
use crate::models::{ExpenseRecord, Money};

use super::aggregate::{by_category, by_day, by_month, total, CategoryTotal, DailyTotal, MonthlyTotal};

/// Expense summary for a set of records
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Total spent across all records
    pub total: Money,
    /// Number of records summarised
    pub count: usize,
    pub categories: Vec<CategoryTotal>,
    pub daily: Vec<DailyTotal>,
    pub monthly: Vec<MonthlyTotal>,
}

impl ExpenseReport {
    /// Summarise a set of records
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            total: total(records),
            count: records.len(),
            categories: by_category(records),
            daily: by_day(records),
            monthly: by_month(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Total Spent: {} ({} expense{})\n",
            self.total.format_with_symbol(currency_symbol),
            self.count,
            if self.count == 1 { "" } else { "s" }
        ));

        let sections: [(&str, Vec<(String, Money)>); 3] = [
            (
                "Spend by Category",
                self.categories
                    .iter()
                    .map(|c| (c.category.to_string(), c.total))
                    .collect(),
            ),
            (
                "Daily Spend Summary",
                self.daily
                    .iter()
                    .map(|d| (d.date.format("%Y-%m-%d").to_string(), d.total))
                    .collect(),
            ),
            (
                "Monthly Spend Summary",
                self.monthly.iter().map(|m| (m.label(), m.total)).collect(),
            ),
        ];

        for (title, rows) in sections {
            output.push('\n');
            output.push_str(title);
            output.push('\n');
            output.push_str(&"-".repeat(title.len()));
            output.push('\n');
            output.push_str(&format_bar_chart(&rows, currency_symbol, DEFAULT_BAR_WIDTH));
        }

        output
    }
}
