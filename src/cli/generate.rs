//! Generate command implementation.

use super::CliError;
use std::fs;
use std::path::PathBuf;

/// Execute the generate command.
///
/// # Errors
///
/// Returns an error if a table validation fails or the output file
/// cannot be written.
pub(crate) fn execute(output: Option<PathBuf>) -> Result<(), CliError> {
    let header = mktables::generate_header()?;

    match output {
        Some(path) => {
            fs::write(&path, &header).map_err(|e| {
                CliError::new(format!("Failed to write {}: {e}", path.display()))
            })?;
            eprintln!("Wrote {} bytes to {}", header.len(), path.display());
        }
        None => print!("{header}"),
    }

    Ok(())
}
