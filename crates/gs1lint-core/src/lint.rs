//! The linter contract: spans, errors and the [`Linter`] trait.
//!
//! A linter inspects exactly one AI component value and returns `Ok(())` or a
//! single [`LintError`] naming the earliest, most specific problem together
//! with the byte range a caller should highlight.

use std::fmt;

use serde::Serialize;

use crate::config::LintConfig;
use crate::external::LookupSource;
use crate::kinds::LintErrorKind;

/// A byte range within the value passed to a linter.
///
/// For a value of length `n`, every span produced by a linter satisfies
/// `start < n || (start == 0 && n == 0)` and `start + len <= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Offset of the first highlighted byte.
    pub start: usize,
    /// Number of highlighted bytes.
    pub len: usize,
}

impl Span {
    /// Creates a span covering `len` bytes from `start`.
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last highlighted byte.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` if this span is well formed for a value of `value_len`
    /// bytes.
    pub const fn is_valid_for(&self, value_len: usize) -> bool {
        let anchored = self.start < value_len || (self.start == 0 && value_len == 0);
        anchored && self.end() <= value_len
    }
}

/// A single reportable lint failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LintError {
    /// What went wrong.
    pub kind: LintErrorKind,
    /// Where it went wrong, relative to the linted value.
    pub span: Span,
}

impl LintError {
    /// Creates an error of `kind` spanning `len` bytes from `start`.
    pub const fn new(kind: LintErrorKind, start: usize, len: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, len),
        }
    }

    /// Re-anchors the span of an error produced on a sub-slice that began at
    /// `offset` within the enclosing value.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self::new(self.kind, self.span.start + offset, self.span.len)
    }

    /// Replaces the kind, keeping the span.
    #[must_use]
    pub const fn with_kind(self, kind: LintErrorKind) -> Self {
        Self { kind, span: self.span }
    }
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (bytes {}..{})",
            self.kind.description(),
            self.span.start,
            self.span.end()
        )
    }
}

impl std::error::Error for LintError {}

/// Outcome of a single lint.
pub type LintResult = Result<(), LintError>;

/// Builds an error for a field that starts at `start` but runs off the end of
/// a value of `value_len` bytes.
///
/// The span covers the field to the end of the value, or the whole value when
/// the field would start at or beyond its end.
pub(crate) const fn truncated(kind: LintErrorKind, start: usize, value_len: usize) -> LintError {
    if start < value_len {
        LintError::new(kind, start, value_len - start)
    } else {
        LintError::new(kind, 0, value_len)
    }
}

/// Everything a linter may consult besides the value itself.
#[derive(Clone, Copy)]
pub struct LintContext<'a> {
    /// Tunable thresholds.
    pub config: &'a LintConfig,
    /// Source for the pluggable table lookups.
    pub lookup: &'a dyn LookupSource,
}

impl fmt::Debug for LintContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LintContext")
            .field("config", self.config)
            .field("lookup", &self.lookup.name())
            .finish()
    }
}

/// A single AI component linter.
///
/// Implementations are stateless: all per-call inputs arrive through `data`
/// and `ctx`, so a linter may be shared freely across threads.
pub trait Linter: Send + Sync {
    /// The name under which the linter is registered.
    fn name(&self) -> &'static str;

    /// Lints `data`, which is the complete component value.
    ///
    /// # Errors
    ///
    /// Returns the earliest applicable [`LintError`]; spans are relative to
    /// `data`.
    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult;
}

/// Returns the prefix of `buf` before its first NUL byte, or all of `buf`.
///
/// # Examples
///
/// ```
/// use gs1lint_core::until_nul;
///
/// assert_eq!(until_nul(b"2401\0junk"), b"2401");
/// assert_eq!(until_nul(b"2401"), b"2401");
/// ```
pub fn until_nul(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_validity() {
        assert!(Span::new(0, 0).is_valid_for(0));
        assert!(!Span::new(1, 0).is_valid_for(0));
        assert!(Span::new(3, 2).is_valid_for(5));
        assert!(!Span::new(3, 3).is_valid_for(5));
        assert!(!Span::new(5, 0).is_valid_for(5));
    }

    #[test]
    fn shifted_re_anchors() {
        let err = LintError::new(LintErrorKind::IllegalDay, 4, 2).shifted(3);
        assert_eq!(err.span, Span::new(7, 2));
        assert_eq!(err.kind, LintErrorKind::IllegalDay);
    }

    #[test]
    fn truncated_spans_to_end() {
        let kind = LintErrorKind::CouponTruncatedGcp;
        assert_eq!(truncated(kind, 3, 10).span, Span::new(3, 7));
        assert_eq!(truncated(kind, 10, 10).span, Span::new(0, 10));
        assert_eq!(truncated(kind, 0, 0).span, Span::new(0, 0));
    }

    #[test]
    fn display_includes_description_and_range() {
        let err = LintError::new(LintErrorKind::IllegalMinute, 0, 2);
        let text = err.to_string();
        assert!(text.starts_with(LintErrorKind::IllegalMinute.description()));
        assert!(text.ends_with("(bytes 0..2)"));
    }

    #[test]
    fn until_nul_handles_leading_nul() {
        assert_eq!(until_nul(b"\0abc"), b"");
        assert_eq!(until_nul(b""), b"");
    }
}
