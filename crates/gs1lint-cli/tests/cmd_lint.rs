//! Integration tests for `gs1lint lint`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `gs1lint` binary.
fn gs1lint_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like …/deps/cmd_lint-<hash>
    // The binary lives in the parent directory.
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("gs1lint");
    path
}

/// A `gs1lint` command with a clean, colorless environment.
fn gs1lint() -> Command {
    let mut cmd = Command::new(gs1lint_bin());
    cmd.env("NO_COLOR", "1")
        .env_remove("GS1LINT_REFERENCE_YEAR")
        .env_remove("GS1LINT_IBAN_MIN_LENGTH")
        .env_remove("GS1LINT_MAX_INPUT_SIZE");
    cmd
}

fn run(args: &[&str]) -> Output {
    gs1lint().args(args).output().expect("run gs1lint")
}

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = gs1lint()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gs1lint");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait gs1lint")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// lint: passing values (exit 0)
// ---------------------------------------------------------------------------

#[test]
fn valid_values_exit_0() {
    let out = run(&["lint", "csum", "0614141000418", "95012345678903"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
}

#[test]
fn valid_values_produce_no_stdout() {
    let out = run(&["lint", "csum", "0614141000418"]);
    assert!(
        out.stdout.is_empty(),
        "lint should not write to stdout; stdout: {}",
        String::from_utf8_lossy(&out.stdout)
    );
}

#[test]
fn summary_on_stderr() {
    let out = run(&["lint", "csum", "0614141000418", "95012345678903"]);
    assert!(
        stderr(&out).contains("2 values, 0 failed"),
        "stderr: {}",
        stderr(&out)
    );
}

#[test]
fn verbose_reports_passing_values() {
    let out = run(&["lint", "csum", "0614141000418", "--verbose"]);
    let err = stderr(&out);
    assert!(err.contains("[ok] csum 0614141000418"), "stderr: {err}");
    assert!(err.contains("linted in "), "stderr: {err}");
}

// ---------------------------------------------------------------------------
// lint: failing values (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn failing_value_exits_1() {
    let out = run(&["lint", "csum", "0614141000418", "0614141000419"]);
    assert_eq!(out.status.code(), Some(1), "stderr: {}", stderr(&out));
}

#[test]
fn failure_names_kind_and_underlines_span() {
    let out = run(&["lint", "csum", "0614141000419"]);
    let err = stderr(&out);
    assert!(err.contains("[E] csum: "), "stderr: {err}");
    assert!(err.contains("[incorrect_check_digit]"), "stderr: {err}");
    assert!(err.contains("(bytes 12..13)"), "stderr: {err}");
    assert!(
        err.contains(&format!("    {}^\n", " ".repeat(12))),
        "stderr: {err}"
    );
    assert!(err.contains("1 of 1 values failed linting"), "stderr: {err}");
}

#[test]
fn every_value_is_reported() {
    let out = run(&["lint", "yymmdd", "991301", "210229", "200229"]);
    let err = stderr(&out);
    assert_eq!(err.matches("[E] yymmdd").count(), 2, "stderr: {err}");
    assert!(err.contains("3 values, 2 failed"), "stderr: {err}");
}

#[test]
fn quiet_keeps_failures_only() {
    let out = run(&["lint", "csum", "0614141000418", "0614141000419", "--quiet"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("[E] csum"), "stderr: {err}");
    assert!(!err.contains("failed"), "stderr: {err}");
}

// ---------------------------------------------------------------------------
// lint: usage errors (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn unknown_linter_exits_2() {
    let out = run(&["lint", "mm", "00"]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("unknown linter \"mm\""), "stderr: {err}");
}

#[test]
fn missing_input_file_exits_2() {
    let out = run(&["lint", "csum", "--input", "/nonexistent/values.txt"]);
    assert_eq!(out.status.code(), Some(2), "stderr: {}", stderr(&out));
}

#[test]
fn input_over_limit_exits_2() {
    let out = run_with_stdin(&["--max-input-size", "4", "lint", "csum"], b"0614141000418\n");
    assert_eq!(out.status.code(), Some(2), "stderr: {}", stderr(&out));
}

// ---------------------------------------------------------------------------
// lint: input sources
// ---------------------------------------------------------------------------

#[test]
fn values_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"0614141000418\r\n95012345678903\n0614141000419\n")
        .expect("write temp file");
    let path = file.path().to_str().expect("utf-8 path");

    let out = run(&["lint", "csum", "-i", path]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("3 values, 1 failed"), "stderr: {}", stderr(&out));
}

#[test]
fn values_from_stdin_when_none_given() {
    let out = run_with_stdin(&["lint", "iso3166alpha2"], b"GB\nDE\n");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("2 values, 0 failed"));
}

#[test]
fn values_from_explicit_stdin() {
    let out = run_with_stdin(&["lint", "iso3166alpha2", "-i", "-"], b"XX\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("[not_iso3166_alpha2]"));
}

#[test]
fn non_utf8_values_are_linted_as_bytes() {
    let out = run_with_stdin(&["lint", "cset82"], b"AB\xffC\n");
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("(bytes 2..3)"), "stderr: {err}");
    assert!(err.contains("AB\\xffC"), "stderr: {err}");
}

// ---------------------------------------------------------------------------
// lint: configuration
// ---------------------------------------------------------------------------

#[test]
fn iban_min_length_flag() {
    let args = ["lint", "iban", "BE71096123456769"];
    assert_eq!(run(&args).status.code(), Some(0));
    let out = run(&[&args[..], &["--iban-min-length", "16"]].concat());
    assert_eq!(out.status.code(), Some(1), "stderr: {}", stderr(&out));
}

#[test]
fn reference_year_from_env() {
    // 2000 is a leap year, 2100 is not.
    let args = ["lint", "yymmdd", "000229"];
    assert_eq!(run(&args).status.code(), Some(0));
    let out = gs1lint()
        .args(args)
        .env("GS1LINT_REFERENCE_YEAR", "60")
        .output()
        .expect("run gs1lint");
    assert_eq!(out.status.code(), Some(1), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("(bytes 4..6)"));
}

// ---------------------------------------------------------------------------
// lint: JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_output_is_ndjson() {
    let out = run(&["--format", "json", "lint", "csum", "0614141000418", "0614141000419"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    let lines: Vec<serde_json::Value> = err
        .lines()
        .map(|l| serde_json::from_str(l).expect("each stderr line is JSON"))
        .collect();
    assert_eq!(lines.len(), 3, "stderr: {err}");
    assert_eq!(lines[0]["valid"], true);
    assert_eq!(lines[1]["valid"], false);
    assert_eq!(lines[1]["error"]["kind"], "incorrect_check_digit");
    assert_eq!(lines[1]["error"]["span"]["start"], 12);
    assert_eq!(lines[2]["summary"]["failed"], 1);
}
