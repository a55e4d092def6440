//! Shared test helpers for the linter unit tests.
//!
//! This module is compiled only in test builds. It provides a default lint
//! context, a scripted [`LookupSource`] double and assertions that state the
//! expected error span with `*` markup: `"AB*CD*EF"` is the value `"ABCDEF"`
//! with bytes 2..4 highlighted, and `"**"` is an empty value with an empty
//! span.
//!
//! Integration tests in `crates/gs1lint-core/tests/` define their own local
//! helpers because they link against the non-test library build where this
//! module is not available.
#![allow(clippy::expect_used, clippy::panic)]

use std::cell::{Cell, RefCell};

use crate::config::LintConfig;
use crate::external::{BuiltinTables, LookupOutcome, LookupSource, builtin_media_type};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, Linter, Span};

static DEFAULT_CONFIG: LintConfig = LintConfig {
    reference_year: crate::config::DEFAULT_REFERENCE_YEAR,
    iban_min_length: crate::config::DEFAULT_IBAN_MIN_LENGTH,
};

static BUILTIN: BuiltinTables = BuiltinTables;

/// A context with the default configuration and the built-in tables.
pub fn ctx() -> LintContext<'static> {
    LintContext {
        config: &DEFAULT_CONFIG,
        lookup: &BUILTIN,
    }
}

/// Splits `"AB*CD*EF"` markup into the value and the highlighted span.
pub fn parse_markup(markup: &str) -> (Vec<u8>, Span) {
    let parts: Vec<&str> = markup.split('*').collect();
    assert_eq!(parts.len(), 3, "markup `{markup}` needs exactly two `*`");
    let start = parts[0].len();
    let len = parts[1].len();
    (parts.concat().into_bytes(), Span::new(start, len))
}

/// Asserts that `linter` accepts `data` under `ctx`.
pub fn assert_pass_with(linter: &dyn Linter, ctx: &LintContext<'_>, data: &str) {
    let result = linter.lint(data.as_bytes(), ctx);
    assert!(
        result.is_ok(),
        "{}: expected `{data}` to pass, got {result:?}",
        linter.name()
    );
}

/// Asserts that `linter` rejects the markup's value with `kind`, highlighting
/// exactly the marked span.
pub fn assert_fail_with(
    linter: &dyn Linter,
    ctx: &LintContext<'_>,
    markup: &str,
    kind: LintErrorKind,
) {
    let (data, span) = parse_markup(markup);
    match linter.lint(&data, ctx) {
        Ok(()) => panic!("{}: expected `{markup}` to fail with {kind:?}", linter.name()),
        Err(err) => {
            assert_eq!(err.kind, kind, "{}: kind for `{markup}`", linter.name());
            assert_eq!(err.span, span, "{}: span for `{markup}`", linter.name());
        }
    }
}

/// [`assert_pass_with`] under the default context.
pub fn assert_pass(linter: &dyn Linter, data: &str) {
    assert_pass_with(linter, &ctx(), data);
}

/// [`assert_fail_with`] under the default context.
pub fn assert_fail(linter: &dyn Linter, markup: &str, kind: LintErrorKind) {
    assert_fail_with(linter, &ctx(), markup, kind);
}

/// A lookup double: the first `countdown` calls succeed, later calls return
/// the scripted outcome. Every candidate is recorded in call order.
///
/// Media type lookups only consult the script for values the built-in table
/// accepts, so a double can simulate an unreachable authority without
/// making malformed values pass.
pub struct ScriptedLookup {
    outcome: LookupOutcome,
    countdown: Cell<usize>,
    seen: RefCell<Vec<Vec<u8>>>,
}

impl ScriptedLookup {
    /// Every call returns `outcome`.
    pub fn new(outcome: LookupOutcome) -> Self {
        Self::after(0, outcome)
    }

    /// The first `successes` calls return [`LookupOutcome::Valid`], the rest
    /// `outcome`.
    pub fn after(successes: usize, outcome: LookupOutcome) -> Self {
        Self {
            outcome,
            countdown: Cell::new(successes),
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }

    /// The candidates looked up so far, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen
            .borrow()
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    fn next(&self, candidate: &[u8]) -> LookupOutcome {
        self.seen.borrow_mut().push(candidate.to_vec());
        let remaining = self.countdown.get();
        if remaining > 0 {
            self.countdown.set(remaining - 1);
            LookupOutcome::Valid
        } else {
            self.outcome
        }
    }
}

impl LookupSource for ScriptedLookup {
    fn name(&self) -> &str {
        "scripted"
    }

    fn media_type(&self, candidate: &[u8]) -> LookupOutcome {
        match builtin_media_type(candidate) {
            LookupOutcome::Valid => self.next(candidate),
            outcome @ (LookupOutcome::Invalid | LookupOutcome::Offline) => outcome,
        }
    }

    fn gcp(&self, candidate: &[u8]) -> LookupOutcome {
        self.next(candidate)
    }
}

/// A context using `lookup` and the default configuration.
pub fn ctx_with(lookup: &dyn LookupSource) -> LintContext<'_> {
    LintContext {
        config: &DEFAULT_CONFIG,
        lookup,
    }
}

/// A context using `config` and the built-in tables.
pub fn ctx_config(config: &LintConfig) -> LintContext<'_> {
    LintContext {
        config,
        lookup: &BUILTIN,
    }
}

#[test]
fn markup_parses_spans() {
    assert_eq!(parse_markup("AB*CD*EF"), (b"ABCDEF".to_vec(), Span::new(2, 2)));
    assert_eq!(parse_markup("**"), (Vec::new(), Span::new(0, 0)));
    assert_eq!(parse_markup("*1*"), (b"1".to_vec(), Span::new(0, 1)));
}

#[test]
fn scripted_lookup_counts_down() {
    let lookup = ScriptedLookup::after(2, LookupOutcome::Offline);
    assert_eq!(lookup.gcp(b"1"), LookupOutcome::Valid);
    assert_eq!(lookup.gcp(b"2"), LookupOutcome::Valid);
    assert_eq!(lookup.gcp(b"3"), LookupOutcome::Offline);
    assert_eq!(lookup.calls(), 3);
    assert_eq!(lookup.seen(), ["1", "2", "3"]);
}
