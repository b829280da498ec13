//! Add, list and import commands

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::Settings;
use crate::display::format_expense_table;
use crate::error::{ExpenseError, ExpenseField, ExpenseResult};
use crate::export::read_csv;
use crate::models::Money;
use crate::services::{ExpenseService, OffsetClock};
use crate::storage::Storage;

use super::credentials::{open_session, CredentialArgs};

/// Add an expense to the signed-in identity's ledger
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
    note: &str,
    amount: &str,
    category: &str,
) -> ExpenseResult<()> {
    let amount = Money::parse(amount).map_err(|e| {
        ExpenseError::validation(
            ExpenseField::Amount,
            format!("'{}' is not a valid amount ({})", amount, e),
        )
    })?;

    let mut session = open_session(storage, settings, args)?;
    let clock = OffsetClock::from_settings(settings)?;
    let record = ExpenseService::new(&storage.credentials, &clock).add(
        &mut session,
        note,
        amount,
        category,
    )?;

    println!("Expense added!");
    println!("  Note:     {}", record.note);
    println!(
        "  Amount:   {}",
        record.amount.format_with_symbol(&settings.currency_symbol)
    );
    println!("  Category: {}", record.category);
    println!(
        "  Date:     {} {}",
        record.date.format(&settings.date_display_format),
        record.time
    );
    Ok(())
}

/// Show the ledger, optionally filtered by a note keyword
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
    search: Option<&str>,
) -> ExpenseResult<()> {
    let session = open_session(storage, settings, args)?;
    let records = session.ledger().search(search.unwrap_or(""));

    print!(
        "{}",
        format_expense_table(
            &records,
            &settings.currency_symbol,
            &settings.date_display_format
        )
    );
    Ok(())
}

/// Append records from a CSV file in the export layout
pub fn handle_import(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
    file: &Path,
) -> ExpenseResult<()> {
    let reader = File::open(file).map_err(|e| {
        ExpenseError::Io(format!("Failed to open {}: {}", file.display(), e))
    })?;
    let records = read_csv(BufReader::new(reader))?;

    let mut session = open_session(storage, settings, args)?;
    let clock = OffsetClock::from_settings(settings)?;
    let count = ExpenseService::new(&storage.credentials, &clock).import(&mut session, records)?;

    println!(
        "Imported {} expense{} from {}",
        count,
        if count == 1 { "" } else { "s" },
        file.display()
    );
    Ok(())
}
