//! Implementation of `gs1lint kinds`.
//!
//! Prints the catalog of lint error kinds: each stable code with its English
//! description. Human mode aligns the codes in a column; JSON mode emits one
//! object per kind (NDJSON).
use std::io::Write;

use gs1lint_core::LintErrorKind;
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `kinds` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(format: &OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_kinds(&mut out, format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

#[derive(Serialize)]
struct KindEntry {
    code: &'static str,
    description: &'static str,
}

fn write_kinds<W: Write>(writer: &mut W, format: &OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            let width = LintErrorKind::ALL
                .iter()
                .map(|kind| kind.code().len())
                .max()
                .unwrap_or(0);
            for kind in LintErrorKind::ALL {
                writeln!(writer, "{:<width$}  {}", kind.code(), kind.description())?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            for kind in LintErrorKind::ALL {
                let entry = KindEntry {
                    code: kind.code(),
                    description: kind.description(),
                };
                serde_json::to_writer(&mut *writer, &entry)?;
                writeln!(writer)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn human_has_one_line_per_kind() {
        let mut buf = Vec::new();
        write_kinds(&mut buf, &OutputFormat::Human).expect("write");
        let out = String::from_utf8(buf).expect("utf-8");
        assert_eq!(out.lines().count(), LintErrorKind::ALL.len());
        assert!(out.lines().any(|l| l.starts_with("incorrect_check_digit ")));
    }

    #[test]
    fn json_codes_round_trip() {
        let mut buf = Vec::new();
        write_kinds(&mut buf, &OutputFormat::Json).expect("write");
        let out = String::from_utf8(buf).expect("utf-8");
        for (line, kind) in out.lines().zip(LintErrorKind::ALL) {
            let v: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
            let code = v["code"].as_str().expect("code is a string");
            assert_eq!(LintErrorKind::from_code(code), Some(*kind));
            assert_eq!(v["description"], kind.description());
        }
    }
}
