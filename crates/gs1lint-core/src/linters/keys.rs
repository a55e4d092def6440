//! GS1 identification keys whose company prefix is checked through the
//! pluggable GCP lookup.

use super::require_digits;
use crate::external::{LookupOutcome, observe};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};

/// Shortest GS1 Company Prefix, in digits.
pub const GCP_MIN_LENGTH: usize = 4;

/// Checks a GS1 Company Prefix candidate occupying `data[start..start + len]`.
///
/// Failures span the candidate.
pub(crate) fn check_gcp(
    data: &[u8],
    start: usize,
    len: usize,
    ctx: &LintContext<'_>,
) -> LintResult {
    let candidate = &data[start..start + len];
    let kind = match observe(ctx.lookup, "gcp", ctx.lookup.gcp(candidate)) {
        LookupOutcome::Valid => return Ok(()),
        LookupOutcome::Invalid => LintErrorKind::InvalidGcpPrefix,
        LookupOutcome::Offline => LintErrorKind::GcpDatasourceOffline,
    };
    Err(LintError::new(kind, start, len))
}

fn lint_key(data: &[u8], offset: usize, ctx: &LintContext<'_>) -> LintResult {
    let key_len = data.len().saturating_sub(offset);
    if key_len < GCP_MIN_LENGTH {
        return Err(LintError::new(
            LintErrorKind::TooShortForKey,
            0,
            data.len(),
        ));
    }
    require_digits(&data[offset..offset + GCP_MIN_LENGTH]).map_err(|err| err.shifted(offset))?;
    check_gcp(data, offset, key_len, ctx)
}

/// A GS1 key starting with a GS1 Company Prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Key;

impl Linter for Key {
    fn name(&self) -> &'static str {
        "key"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        lint_key(data, 0, ctx)
    }
}

/// A GS1 key whose GS1 Company Prefix starts after one leading character,
/// such as the indicator digit of a GTIN-14.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyOff1;

impl Linter for KeyOff1 {
    fn name(&self) -> &'static str {
        "keyoff1"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        lint_key(data, 1, ctx)
    }
}
