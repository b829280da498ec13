//! CSV export and re-import of expense records
//!
//! Layout: `Note,Amount,Category,Date,Time`, one row per record in ledger
//! order, amounts with exactly two decimals, dates as `YYYY-MM-DD`.

use std::io::{Read, Write};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryMode, ExpenseRecord, Money};

/// Column headers, in order
pub const CSV_HEADER: [&str; 5] = ["Note", "Amount", "Category", "Date", "Time"];

/// Serialize records to CSV bytes
pub fn to_csv(records: &[ExpenseRecord]) -> ExpenseResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(buffer)
}

/// Stream records as CSV to a writer
pub fn write_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for record in records {
        let amount = record.amount.to_string();
        let date = record.date.format("%Y-%m-%d").to_string();
        csv_writer
            .write_record([
                record.note.as_str(),
                amount.as_str(),
                record.category.as_str(),
                date.as_str(),
                record.time.as_str(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Parse records from CSV in the export layout
///
/// The header must match [`CSV_HEADER`]. Rows are not validated against the
/// ledger policy here; [`crate::services::Ledger::import`] does that.
pub fn read_csv<R: Read>(reader: R) -> ExpenseResult<Vec<ExpenseRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(ExpenseError::Csv(format!(
            "Unexpected header: expected {}, found {}",
            CSV_HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        // +2: one for the header, one for 1-based numbering
        records.push(parse_row(&row, index + 2)?);
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, line: usize) -> ExpenseResult<ExpenseRecord> {
    let field = |i: usize| row.get(i).unwrap_or("");
    let row_error = |what: &str, value: &str| {
        ExpenseError::Csv(format!("line {}: invalid {} '{}'", line, what, value))
    };

    let amount = Money::parse(field(1)).map_err(|_| row_error("amount", field(1)))?;
    let category = Category::parse(field(2), CategoryMode::FreeText)
        .map_err(|_| row_error("category", field(2)))?;
    let date = NaiveDate::parse_from_str(field(3).trim(), "%Y-%m-%d")
        .map_err(|_| row_error("date", field(3)))?;

    Ok(ExpenseRecord::new(field(0), amount, category, date, field(4)))
}

/// File name offered for a user's export
pub fn default_export_file_name(identity: &str) -> String {
    format!("{}_expenses.csv", identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StandardCategory;

    fn coffee() -> ExpenseRecord {
        ExpenseRecord::new(
            "Coffee",
            Money::from_cents(450),
            StandardCategory::Food.into(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "09:00:00",
        )
    }

    #[test]
    fn test_header_and_row() {
        let text = String::from_utf8(to_csv(&[coffee()]).unwrap()).unwrap();
        assert_eq!(
            text,
            "Note,Amount,Category,Date,Time\nCoffee,4.50,Food,2024-03-01,09:00:00\n"
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let text = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(text, "Note,Amount,Category,Date,Time\n");
    }

    #[test]
    fn test_round_trip_is_exact() {
        let bytes = to_csv(&[coffee()]).unwrap();
        let parsed = read_csv(bytes.as_slice()).unwrap();

        assert_eq!(parsed, vec![coffee()]);
        assert_eq!(parsed[0].amount.cents(), 450);
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let record = ExpenseRecord {
            note: "Dinner, \"fancy\"\nwith friends".to_string(),
            ..coffee()
        };

        let bytes = to_csv(&[record.clone()]).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\"Dinner, \"\"fancy\"\"\nwith friends\""));

        assert_eq!(read_csv(bytes.as_slice()).unwrap(), vec![record]);
    }

    #[test]
    fn test_order_preserved_no_summary_row() {
        let records: Vec<_> = ["b", "a", "c"]
            .iter()
            .map(|n| ExpenseRecord {
                note: n.to_string(),
                ..coffee()
            })
            .collect();

        let text = String::from_utf8(to_csv(&records).unwrap()).unwrap();
        let notes: Vec<_> = text.lines().skip(1).map(|l| &l[..1]).collect();
        assert_eq!(notes, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_wrong_header_rejected() {
        let data = "Amount,Note,Category,Date,Time\n4.50,Coffee,Food,2024-03-01,09:00\n";
        assert!(matches!(read_csv(data.as_bytes()), Err(ExpenseError::Csv(_))));
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let data = "Note,Amount,Category,Date,Time\nCoffee,4.50,Food,2024-03-01,\nTea,abc,Food,2024-03-01,\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_export_file_name("a@x.com"), "a@x.com_expenses.csv");
    }
}
