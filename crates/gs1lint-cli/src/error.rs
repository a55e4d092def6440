/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `gs1lint` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: usage or input failure. The linter name is unknown or
///   the values could not be read; nothing was linted.
/// - Exit code **1**: lint failure. Every value was linted and at least one
///   was rejected.
use std::fmt;
use std::path::PathBuf;

use gs1lint_core::UnknownLinter;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `gs1lint` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: usage and input failures ---
    /// The linter name is not registered.
    UnknownLinter {
        /// The name that failed to resolve.
        name: String,
    },

    /// An `--input` file could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read an `--input` file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-input-size` limit.
    InputTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only).
        actual: Option<u64>,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// `"-"` for stdin, `"stderr"`/`"stdout"` for output, or a path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: lint failures ---
    /// At least one value failed linting.
    ///
    /// The individual failures have already been reported; this variant
    /// exists so `main` can exit with code 1 cleanly.
    LintFailed {
        /// Number of rejected values.
        failed: usize,
        /// Number of values linted.
        total: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: usage or input failure.
    /// - `1`: one or more values failed linting.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownLinter { .. }
            | Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InputTooLarge { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. } => 2,

            Self::LintFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::UnknownLinter { name } => {
                format!("error: unknown linter {name:?} (see `gs1lint list`)")
            }
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::InputTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: input too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::InputTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: input too large: {source} exceeded limit of {limit} bytes")
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::LintFailed { failed, total } => {
                format!("error: {failed} of {total} values failed linting")
            }
        }
    }
}

impl From<UnknownLinter> for CliError {
    fn from(e: UnknownLinter) -> Self {
        Self::UnknownLinter { name: e.name }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
