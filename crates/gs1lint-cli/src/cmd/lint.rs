//! Implementation of `gs1lint lint <linter> [values...]`.
//!
//! Resolves the named linter and runs it over every value, emitting one
//! report per failing value (and per passing value with `--verbose`) to
//! stderr.
//!
//! Exit codes:
//! - 0 = every value passed
//! - 1 = at least one value failed
//! - 2 = unknown linter or unreadable input
use std::time::Instant;

use gs1lint_core::{Dictionary, LintConfig};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_result, write_summary, write_timing_human};

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `lint` command.
///
/// Every value is linted even after a failure, so a batch reports all of
/// its rejects in one pass.
///
/// # Errors
///
/// - [`CliError::UnknownLinter`] if `linter` is not registered.
/// - [`CliError::LintFailed`] if one or more values were rejected.
/// - [`CliError::IoError`] if stderr cannot be written.
pub fn run(
    linter: &str,
    values: &[Vec<u8>],
    config: LintConfig,
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let dictionary = Dictionary::new().with_config(config);
    let bound = dictionary.resolve(linter)?;

    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(no_color, quiet, verbose);

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();
    let to_cli = |e: std::io::Error| CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    };

    let started = Instant::now();
    let mut failed = 0;
    for value in values {
        let result = bound.lint(value);
        if result.is_err() {
            failed += 1;
        }
        write_result(&mut err_out, bound.name(), value, &result, mode, &fmt_config)
            .map_err(to_cli)?;
    }
    let elapsed = started.elapsed();

    write_summary(&mut err_out, values.len(), failed, mode, &fmt_config).map_err(to_cli)?;
    if mode == FormatMode::Human {
        write_timing_human(&mut err_out, "linted", elapsed, &fmt_config).map_err(to_cli)?;
    }

    if failed > 0 {
        Err(CliError::LintFailed {
            failed,
            total: values.len(),
        })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
