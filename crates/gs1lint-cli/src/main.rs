use clap::Parser;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        // A lint failure has already been reported value by value.
        let reported = matches!(e, CliError::LintFailed { .. });
        let silent = cli.quiet || matches!(cli.format, OutputFormat::Json);
        if !(reported && silent) {
            eprintln!("{}", e.message());
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Lint {
            linter,
            values,
            input,
            reference_year,
            iban_min_length,
        } => {
            let values = match input {
                Some(source) => io::read_values(source, cli.max_input_size)?,
                None if values.is_empty() => {
                    io::read_values(&PathOrStdin::Stdin, cli.max_input_size)?
                }
                None => values.iter().map(|v| v.as_bytes().to_vec()).collect(),
            };
            let config = gs1lint_core::LintConfig {
                reference_year: *reference_year,
                iban_min_length: *iban_min_length,
            };
            cmd::lint::run(
                linter,
                &values,
                config,
                &cli.format,
                cli.quiet,
                cli.verbose,
                cli.no_color,
            )
        }
        Command::List => cmd::list::run(&cli.format),
        Command::Kinds => cmd::kinds::run(&cli.format),
        Command::Version => {
            println!("{}", gs1lint_core::version());
            Ok(())
        }
    }
}
