//! Expense table formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
}

/// Format records as a table, in the order given
pub fn format_expense_table(
    records: &[ExpenseRecord],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if records.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let rows = records.iter().enumerate().map(|(i, r)| ExpenseRow {
        index: i + 1,
        note: r.note.clone(),
        amount: r.amount.format_with_symbol(currency_symbol),
        category: r.category.to_string(),
        date: r.date.format(date_format).to_string(),
        time: r.time.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, StandardCategory};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "₹", "%d-%m-%Y"), "No expenses yet.\n");
    }

    #[test]
    fn test_table_contents() {
        let records = vec![ExpenseRecord::new(
            "Coffee",
            Money::from_cents(450),
            StandardCategory::Food.into(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "09:00:00 AM",
        )];

        let table = format_expense_table(&records, "₹", "%d-%m-%Y");
        assert!(table.contains("Note"));
        assert!(table.contains("Coffee"));
        assert!(table.contains("₹4.50"));
        assert!(table.contains("01-03-2024"));
        assert!(table.contains("09:00:00 AM"));
    }
}
