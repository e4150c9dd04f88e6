//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use scout_domain::{LeadId, LeadRow};
use scout_store::SqliteStore;

/// Execute the add command.
pub fn execute_add(args: AddArgs, store: &SqliteStore, formatter: &Formatter) -> Result<LeadId> {
    let lead = build_lead(args, store)?;
    store.insert_lead(&lead)?;

    println!("{}", formatter.lead_added(&lead.id));

    Ok(lead.id)
}

fn build_lead(args: AddArgs, store: &SqliteStore) -> Result<LeadRow> {
    for (field, value) in [("name", &args.name), ("city", &args.city), ("state", &args.state)] {
        if value.trim().is_empty() {
            return Err(CliError::InvalidInput(format!("{} must not be empty", field)));
        }
    }

    let id = match args.id.as_deref().map(str::trim) {
        Some("") => return Err(CliError::InvalidInput("id must not be empty".to_string())),
        Some(id) => LeadId::parse(id),
        None => LeadId::Number(store.next_numeric_id()?),
    };

    Ok(LeadRow::new(
        id,
        args.name.trim(),
        args.city.trim(),
        args.state.trim(),
    ))
}
