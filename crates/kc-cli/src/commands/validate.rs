//! Realm export validation command.

use kc_migration::ExportStatistics;

use crate::cli::ValidateArgs;
use crate::output::{rule, success, warning, REPORT_RULE};
use crate::CliError;

/// Runs the validation command, printing the report on success.
pub fn run_validate(args: &ValidateArgs) -> crate::CliResult<ExportStatistics> {
    let stats = ExportStatistics::from_file(&args.file)?;

    if !stats.has_realm_name() {
        warning("Warning: No 'realm' field found");
    }

    println!("Realm Export Analysis: {}", args.file.display());
    rule(REPORT_RULE);
    println!("{stats}");
    rule(REPORT_RULE);
    success("Validation: PASSED");

    Ok(stats)
}

/// Formats a validation failure for the operator.
#[must_use]
pub fn failure_message(err: &CliError) -> String {
    match err.as_io() {
        Some(io) => format!("Error reading file: {io}"),
        None => format!("Error: {err}"),
    }
}
