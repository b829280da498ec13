//! Summary report command

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::reports::ExpenseReport;
use crate::storage::Storage;

use super::credentials::{open_session, CredentialArgs};

/// Print the total and the category, daily and monthly breakdowns
///
/// With `search`, the report covers only records whose note matches.
pub fn handle_report(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
    search: Option<&str>,
) -> ExpenseResult<()> {
    let session = open_session(storage, settings, args)?;
    let records = session.ledger().search(search.unwrap_or(""));

    let report = ExpenseReport::generate(&records);
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
