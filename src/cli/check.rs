//! Check command implementation.

use super::output::format_text;
use super::{CliError, OutputFormat};

/// Execute the check command.
///
/// Runs every table validation (symmetry cardinalities, mutual
/// exclusivity, tile table completeness) and prints a summary of the
/// derived tables.
///
/// # Errors
///
/// Returns an error if any validation fails.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    let summary = mktables::summarize()?;

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&summary));
            println!("All table validations passed.");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("Failed to serialize summary: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
