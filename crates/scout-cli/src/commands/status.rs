//! Status command implementation.

use crate::cli::StatusArgs;
use crate::error::Result;
use crate::output::Formatter;
use scout_store::{LeadFilter, SqliteStore};

/// Execute the status command.
pub fn execute_status(args: StatusArgs, store: &SqliteStore, formatter: &Formatter) -> Result<usize> {
    let filter = match args.status {
        Some(status) => LeadFilter::with_status(status.into()),
        None => LeadFilter::default(),
    };

    let records = store.list_leads(&filter)?;
    println!("{}", formatter.format_records(&records)?);

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StatusArg;
    use crate::config::OutputFormat;
    use scout_domain::LeadRow;

    #[test]
    fn test_status_filter() {
        let store = SqliteStore::new(":memory:").unwrap();
        store.insert_lead(&LeadRow::new(1, "Acme", "Reno", "NV")).unwrap();
        store.insert_lead(&LeadRow::new(2, "Beta", "Reno", "NV")).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let all = execute_status(StatusArgs { status: None }, &store, &formatter).unwrap();
        assert_eq!(all, 2);

        let done = execute_status(
            StatusArgs {
                status: Some(StatusArg::Done),
            },
            &store,
            &formatter,
        )
        .unwrap();
        assert_eq!(done, 0);
    }
}
