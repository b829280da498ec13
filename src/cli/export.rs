//! CSV export command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::export::{default_export_file_name, write_csv};
use crate::storage::Storage;

use super::credentials::{open_session, CredentialArgs};

/// Write the (optionally filtered) ledger to a CSV file
///
/// Without `output` the file is `<identity>_expenses.csv` in the working
/// directory.
pub fn handle_export(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
    output: Option<PathBuf>,
    search: Option<&str>,
) -> ExpenseResult<()> {
    let session = open_session(storage, settings, args)?;
    let records = session.ledger().search(search.unwrap_or(""));

    let output =
        output.unwrap_or_else(|| PathBuf::from(default_export_file_name(session.identity())));

    let file = File::create(&output)?;
    write_csv(&records, BufWriter::new(file))?;

    tracing::info!(
        identity = session.identity(),
        count = records.len(),
        path = %output.display(),
        "expenses exported"
    );
    println!(
        "Exported {} expense{} to {}",
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        output.display()
    );
    Ok(())
}
