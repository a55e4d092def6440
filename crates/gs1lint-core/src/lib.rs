#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod charset;
pub mod check_digits;
pub mod config;
pub mod dispatch;
pub mod external;
pub mod kinds;
pub mod lint;
pub mod linters;
pub mod lookup;
pub mod tables;

#[cfg(test)]
mod test_helpers;

pub use config::{DEFAULT_IBAN_MIN_LENGTH, DEFAULT_REFERENCE_YEAR, LintConfig};
pub use dispatch::{BoundLinter, Dictionary, REGISTRY, UnknownLinter, linter_names, resolve};
pub use external::{BuiltinTables, FnLookup, LookupFn, LookupOutcome, LookupSource};
pub use kinds::LintErrorKind;
pub use lint::{LintContext, LintError, LintResult, Linter, Span, until_nul};
pub use linters::keys::GCP_MIN_LENGTH;

/// Returns the current version of the gs1lint-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
