//! Character set membership and simple character-level shape checks.

use super::require_digits;
use crate::charset::{self, CSET39, CSET64, CSET82, HEX, first_outside};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};

/// Rejects the first byte outside `class` with `kind`.
fn require_class(data: &[u8], class: u8, kind: LintErrorKind) -> LintResult {
    match first_outside(data, class) {
        Some(pos) => Err(LintError::new(kind, pos, 1)),
        None => Ok(()),
    }
}

/// GS1 AI encodable character set 82.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cset82;

impl Linter for Cset82 {
    fn name(&self) -> &'static str {
        "cset82"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        require_class(data, CSET82, LintErrorKind::InvalidCset82Character)
    }
}

/// GS1 AI encodable character set 39.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cset39;

impl Linter for Cset39 {
    fn name(&self) -> &'static str {
        "cset39"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        require_class(data, CSET39, LintErrorKind::InvalidCset39Character)
    }
}

/// Digits only.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsetNumeric;

impl Linter for CsetNumeric {
    fn name(&self) -> &'static str {
        "csetnumeric"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        require_digits(data)
    }
}

/// File-safe, URI-safe base64 with optional `=` padding.
///
/// Padding may only appear as a suffix of one or two `=`, and only when the
/// padded length is a multiple of four.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cset64;

impl Linter for Cset64 {
    fn name(&self) -> &'static str {
        "cset64"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        let Some(pos) = first_outside(data, CSET64) else {
            return Ok(());
        };
        if data[pos] != b'=' {
            return Err(LintError::new(LintErrorKind::InvalidCset64Character, pos, 1));
        }
        if let Some(rel) = data[pos..].iter().position(|&b| b != b'=') {
            return Err(LintError::new(
                LintErrorKind::InvalidCset64Character,
                pos + rel,
                1,
            ));
        }
        let padding = data.len() - pos;
        if padding > 2 || data.len() % 4 != 0 {
            return Err(LintError::new(
                LintErrorKind::InvalidCset64Padding,
                pos,
                padding,
            ));
        }
        Ok(())
    }
}

/// Percent-encoded text: every `%` introduces exactly two hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PcEnc;

impl Linter for PcEnc {
    fn name(&self) -> &'static str {
        "pcenc"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        let mut pos = 0;
        while pos < data.len() {
            if data[pos] != b'%' {
                pos += 1;
                continue;
            }
            if pos + 2 >= data.len() {
                return Err(LintError::new(
                    LintErrorKind::InvalidPercentSequence,
                    pos,
                    data.len() - pos,
                ));
            }
            if !charset::is(data[pos + 1], HEX) || !charset::is(data[pos + 2], HEX) {
                return Err(LintError::new(
                    LintErrorKind::InvalidPercentSequence,
                    pos,
                    3,
                ));
            }
            pos += 3;
        }
        Ok(())
    }
}

/// A single hyphen, or a run of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyphen;

impl Linter for Hyphen {
    fn name(&self) -> &'static str {
        "hyphen"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        match data.iter().position(|&b| b != b'-') {
            Some(pos) => Err(LintError::new(LintErrorKind::NotHyphen, pos, 1)),
            None => Ok(()),
        }
    }
}

/// At least one non-digit character somewhere in the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasNonDigit;

impl Linter for HasNonDigit {
    fn name(&self) -> &'static str {
        "hasnondigit"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if require_digits(data).is_ok() {
            return Err(LintError::new(
                LintErrorKind::RequiresNonDigitCharacter,
                0,
                data.len(),
            ));
        }
        Ok(())
    }
}

/// Importer index: a single character from the CSET 64 alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImporterIdx;

impl Linter for ImporterIdx {
    fn name(&self) -> &'static str {
        "importeridx"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if data.len() != 1 {
            return Err(LintError::new(
                LintErrorKind::ImporterIdxMustBeOneCharacter,
                0,
                data.len(),
            ));
        }
        require_class(data, CSET64, LintErrorKind::InvalidImporterIdxCharacter)
    }
}
