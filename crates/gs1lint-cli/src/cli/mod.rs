//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gs1lint_core::{DEFAULT_IBAN_MIN_LENGTH, DEFAULT_REFERENCE_YEAR};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` writes one line per failing value (plus a highlight) to stderr.
/// `Json` writes one JSON object per value (NDJSON).
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `gs1lint` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Lint one or more values with a named linter.
    ///
    /// Values come from the command line, or one per line from `--input`
    /// (stdin when neither is given).
    Lint {
        /// Linter name, as listed by `gs1lint list`.
        #[arg(value_name = "LINTER")]
        linter: String,
        /// Values to lint.
        #[arg(value_name = "VALUE", conflicts_with = "input")]
        values: Vec<String>,
        /// Read newline-separated values from a file, or `-` for stdin.
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathOrStdin>,
        /// Two-digit reference year for the `YYMMDD` century window.
        #[arg(
            long,
            env = "GS1LINT_REFERENCE_YEAR",
            default_value_t = DEFAULT_REFERENCE_YEAR,
            value_parser = clap::value_parser!(u8).range(0..=99)
        )]
        reference_year: u8,
        /// IBANs no longer than this many characters are too short.
        #[arg(
            long,
            env = "GS1LINT_IBAN_MIN_LENGTH",
            default_value_t = DEFAULT_IBAN_MIN_LENGTH
        )]
        iban_min_length: usize,
    },

    /// List every registered linter name.
    List,

    /// List every error kind with its description.
    Kinds,

    /// Print the gs1lint-core library version.
    Version,
}

/// Lint GS1 Application Identifier element values.
#[derive(Parser)]
#[command(name = "gs1lint", version, about)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except failures (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also report passing values and timing (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes for `--input`.
    ///
    /// Can also be set via the `GS1LINT_MAX_INPUT_SIZE` environment variable.
    /// Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "GS1LINT_MAX_INPUT_SIZE",
        default_value = "16777216"
    )]
    pub max_input_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
