//! Implementation of `gs1lint list`.
//!
//! Prints every registered linter name to stdout, one per line in ascending
//! order, or as a single JSON array with `--format json`.
use std::io::Write;

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `list` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(format: &OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_names(&mut out, format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

fn write_names<W: Write>(writer: &mut W, format: &OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            for name in gs1lint_core::linter_names() {
                writeln!(writer, "{name}")?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let names: Vec<&str> = gs1lint_core::linter_names().collect();
            serde_json::to_writer(&mut *writer, &names)?;
            writeln!(writer)
        }
    }
}
