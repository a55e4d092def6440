/// Lint result formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): one line per failing value naming the error
///   kind, followed by the value with the error span underlined. Colors are
///   disabled when `--no-color` is set, the `NO_COLOR` environment variable
///   is present, or stderr is not a TTY.
/// - **JSON mode**: one single-line JSON object per value (NDJSON).
///
/// Both modes support a **quiet** flag (failures only, no summary) and a
/// **verbose** flag (passing values and timing too).
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use gs1lint_core::{LintErrorKind, LintResult, Span};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the result formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Report failures only.
    pub quiet: bool,
    /// Report passing values and timing too.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// Renders `value` with non-printable bytes escaped, returning the rendered
/// text split around `span`.
///
/// An empty span renders as an empty middle part.
fn split_at_span(value: &[u8], span: Span) -> [String; 3] {
    let start = span.start.min(value.len());
    let end = span.end().min(value.len());
    [&value[..start], &value[start..end], &value[end..]]
        .map(|part| part.escape_ascii().to_string())
}

/// The value, and a marker line underlining the span with `^`.
///
/// An empty span is marked with a single `^` at its position.
pub fn highlight(value: &[u8], span: Span) -> (String, String) {
    let [before, within, after] = split_at_span(value, span);
    let marker = format!("{}{}", " ".repeat(before.len()), "^".repeat(within.len().max(1)));
    (format!("{before}{within}{after}"), marker)
}

// ---------------------------------------------------------------------------
// Human-mode formatting
// ---------------------------------------------------------------------------

/// Writes the outcome for one value in human-readable format.
///
/// ```text
/// [E] csum: The check digit is incorrect. [incorrect_check_digit] (bytes 12..13)
///     0614141000419
///                 ^
/// ```
///
/// Passing values are reported only in verbose mode, as `[ok] csum 0614141000418`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_result_human<W: Write>(
    writer: &mut W,
    linter: &str,
    value: &[u8],
    result: &LintResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let Err(err) = result else {
        if !config.verbose {
            return Ok(());
        }
        let shown = value.escape_ascii();
        return if config.colors {
            writeln!(writer, "{ANSI_GREEN}[ok]{ANSI_RESET} {linter} {shown}")
        } else {
            writeln!(writer, "[ok] {linter} {shown}")
        };
    };

    let tag = if config.colors {
        format!("{ANSI_RED}[E]{ANSI_RESET}")
    } else {
        "[E]".to_owned()
    };
    writeln!(
        writer,
        "{tag} {linter}: {} [{}] (bytes {}..{})",
        err.kind.description(),
        err.kind.code(),
        err.span.start,
        err.span.end()
    )?;

    let [before, within, after] = split_at_span(value, err.span);
    if config.colors {
        writeln!(writer, "    {before}{ANSI_RED}{within}{ANSI_RESET}{after}")?;
    } else {
        writeln!(writer, "    {before}{within}{after}")?;
    }
    let (_, marker) = highlight(value, err.span);
    writeln!(writer, "    {marker}")
}

/// Writes the summary line: `3 values, 1 failed`.
///
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    total: usize,
    failed: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{total} {}, {failed} failed",
        pluralize(total, "value", "values")
    )
}

/// Writes timing information to `writer` in verbose mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}us", duration.as_micros())
}

// ---------------------------------------------------------------------------
// JSON-mode formatting (NDJSON)
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonError {
    kind: LintErrorKind,
    description: &'static str,
    span: Span,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    linter: &'a str,
    value: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

/// Writes the outcome for one value as a NDJSON line.
///
/// ```json
/// {"linter":"csum","value":"0614141000419","valid":false,"error":{"kind":"incorrect_check_digit","description":"...","span":{"start":12,"len":1}}}
/// ```
///
/// Non-UTF-8 bytes in the value are replaced with U+FFFD. In quiet mode
/// passing values are suppressed.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_result_json<W: Write>(
    writer: &mut W,
    linter: &str,
    value: &[u8],
    result: &LintResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && result.is_ok() {
        return Ok(());
    }
    let line = JsonResult {
        linter,
        value: String::from_utf8_lossy(value).into_owned(),
        valid: result.is_ok(),
        error: result.as_ref().err().map(|err| JsonError {
            kind: err.kind,
            description: err.kind.description(),
            span: err.span,
        }),
    };
    serde_json::to_writer(&mut *writer, &line)?;
    writeln!(writer)
}

/// Writes a JSON summary object as a final NDJSON line.
///
/// Format: `{"summary":{"values":3,"failed":1}}`. Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    total: usize,
    failed: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        r#"{{"summary":{{"values":{total},"failed":{failed}}}}}"#,
    )
}

// ---------------------------------------------------------------------------
// Helper: dispatch by format
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

/// Writes the outcome for one value in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_result<W: Write>(
    writer: &mut W,
    linter: &str,
    value: &[u8],
    result: &LintResult,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_result_human(writer, linter, value, result, config),
        FormatMode::Json => write_result_json(writer, linter, value, result, config),
    }
}

/// Writes a summary to `writer` in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    total: usize,
    failed: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_summary_human(writer, total, failed, config),
        FormatMode::Json => write_summary_json(writer, total, failed, config),
    }
}

/// Returns the singular or plural form of `word` depending on `count`.
fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use gs1lint_core::LintError;

    use super::*;

    fn plain() -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    fn capture(mode: FormatMode, value: &[u8], result: &LintResult, config: &FormatterConfig) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, "csum", value, result, mode, config).expect("write");
        String::from_utf8(buf).expect("utf-8")
    }

    fn bad_check_digit() -> LintResult {
        Err(LintError::new(LintErrorKind::IncorrectCheckDigit, 12, 1))
    }

    // ── highlight ────────────────────────────────────────────────────────────

    #[test]
    fn highlight_underlines_span() {
        let (line, marker) = highlight(b"ABCDEF", Span::new(2, 2));
        assert_eq!(line, "ABCDEF");
        assert_eq!(marker, "  ^^");
    }

    #[test]
    fn highlight_empty_span_marks_position() {
        let (line, marker) = highlight(b"", Span::new(0, 0));
        assert_eq!(line, "");
        assert_eq!(marker, "^");
    }

    #[test]
    fn highlight_escapes_non_printable_bytes() {
        let (line, marker) = highlight(b"\x00AB", Span::new(1, 1));
        assert_eq!(line, "\\x00AB");
        assert_eq!(marker, "    ^");
    }

    // ── human ────────────────────────────────────────────────────────────────

    #[test]
    fn human_failure_names_kind_and_span() {
        let out = capture(FormatMode::Human, b"0614141000419", &bad_check_digit(), &plain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3, "output: {out}");
        assert!(lines[0].starts_with("[E] csum: "), "output: {out}");
        assert!(lines[0].contains("[incorrect_check_digit]"), "output: {out}");
        assert!(lines[0].ends_with("(bytes 12..13)"), "output: {out}");
        assert_eq!(lines[1], "    0614141000419");
        assert_eq!(lines[2], format!("    {}^", " ".repeat(12)));
    }

    #[test]
    fn human_pass_silent_unless_verbose() {
        assert!(capture(FormatMode::Human, b"0614141000418", &Ok(()), &plain()).is_empty());
        let verbose = FormatterConfig {
            verbose: true,
            ..plain()
        };
        let out = capture(FormatMode::Human, b"0614141000418", &Ok(()), &verbose);
        assert_eq!(out, "[ok] csum 0614141000418\n");
    }

    #[test]
    fn human_color_wraps_span() {
        let colored = FormatterConfig {
            colors: true,
            ..plain()
        };
        let out = capture(FormatMode::Human, b"0614141000419", &bad_check_digit(), &colored);
        assert!(out.contains(&format!("{ANSI_RED}9{ANSI_RESET}")), "output: {out:?}");
    }

    #[test]
    fn human_summary_format() {
        let mut buf = Vec::new();
        write_summary(&mut buf, 1, 0, FormatMode::Human, &plain()).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf-8"), "1 value, 0 failed\n");
    }

    #[test]
    fn summary_suppressed_in_quiet_mode() {
        let quiet = FormatterConfig {
            quiet: true,
            ..plain()
        };
        for mode in [FormatMode::Human, FormatMode::Json] {
            let mut buf = Vec::new();
            write_summary(&mut buf, 3, 1, mode, &quiet).expect("write");
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn verbose_timing() {
        let verbose = FormatterConfig {
            verbose: true,
            ..plain()
        };
        let mut buf = Vec::new();
        write_timing_human(&mut buf, "linted", Duration::from_micros(42), &verbose)
            .expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf-8"), "linted in 42us\n");
        let mut buf = Vec::new();
        write_timing_human(&mut buf, "linted", Duration::from_micros(42), &plain())
            .expect("write");
        assert!(buf.is_empty());
    }

    // ── json ─────────────────────────────────────────────────────────────────

    #[test]
    fn json_failure_fields() {
        let out = capture(FormatMode::Json, b"0614141000419", &bad_check_digit(), &plain());
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).expect("valid JSON");
        assert_eq!(v["linter"], "csum");
        assert_eq!(v["valid"], false);
        assert_eq!(v["error"]["kind"], "incorrect_check_digit");
        assert_eq!(v["error"]["span"]["start"], 12);
        assert_eq!(v["error"]["span"]["len"], 1);
        assert!(v["error"]["description"].is_string());
    }

    #[test]
    fn json_pass_has_no_error() {
        let out = capture(FormatMode::Json, b"0614141000418", &Ok(()), &plain());
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).expect("valid JSON");
        assert_eq!(v["valid"], true);
        assert!(v.get("error").is_none());
    }

    #[test]
    fn json_quiet_keeps_failures_only() {
        let quiet = FormatterConfig {
            quiet: true,
            ..plain()
        };
        assert!(capture(FormatMode::Json, b"1", &Ok(()), &quiet).is_empty());
        assert!(!capture(FormatMode::Json, b"1", &bad_check_digit(), &quiet).is_empty());
    }

    #[test]
    fn json_summary_format() {
        let mut buf = Vec::new();
        write_summary(&mut buf, 3, 1, FormatMode::Json, &plain()).expect("write");
        let out = String::from_utf8(buf).expect("utf-8");
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).expect("valid JSON");
        assert_eq!(v["summary"]["values"], 3);
        assert_eq!(v["summary"]["failed"], 1);
    }

    #[test]
    fn colors_disabled_by_no_color_flag() {
        assert!(!colors_enabled(true));
    }
}
