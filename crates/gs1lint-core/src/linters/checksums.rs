//! Values carrying their own check characters.

use super::require_digits;
use crate::charset::{CSET82, first_outside};
use crate::check_digits::{CHECK_PAIR_PRIMES, check_character_pair, gs1_mod10, iban_mod97};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};
use crate::lookup::sorted_contains;
use crate::tables::ISO3166_ALPHA2;

/// Digits ending in a GS1 standard check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Csum;

impl Linter for Csum {
    fn name(&self) -> &'static str {
        "csum"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if data.is_empty() {
            return Err(LintError::new(LintErrorKind::TooShortForCheckDigit, 0, 0));
        }
        require_digits(data)?;
        if !gs1_mod10(data) {
            return Err(LintError::new(
                LintErrorKind::IncorrectCheckDigit,
                data.len() - 1,
                1,
            ));
        }
        Ok(())
    }
}

/// CSET 82 text ending in a GS1 check character pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsumAlpha;

impl Linter for CsumAlpha {
    fn name(&self) -> &'static str {
        "csumalpha"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if let Some(pos) = first_outside(data, CSET82) {
            return Err(LintError::new(
                LintErrorKind::InvalidCset82Character,
                pos,
                1,
            ));
        }
        let Some(body_len) = data.len().checked_sub(2) else {
            return Err(LintError::new(
                LintErrorKind::TooShortForCheckPair,
                0,
                data.len(),
            ));
        };
        if body_len > CHECK_PAIR_PRIMES.len() {
            return Err(LintError::new(
                LintErrorKind::TooLongForCheckPairImplementation,
                0,
                data.len(),
            ));
        }
        let (body, pair) = data.split_at(body_len);
        if check_character_pair(body).as_ref().map(<[u8; 2]>::as_slice) != Some(pair) {
            return Err(LintError::new(
                LintErrorKind::IncorrectCheckPair,
                body_len,
                2,
            ));
        }
        Ok(())
    }
}

/// International Bank Account Number (ISO 13616).
///
/// The first two characters must be an ISO 3166 alpha-2 country code. The
/// check digits at offsets 2-3 are verified by the MOD 97-10 rearrangement,
/// with characters validated as the checksum reaches them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iban;

impl Linter for Iban {
    fn name(&self) -> &'static str {
        "iban"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        let len = data.len();
        if len <= ctx.config.iban_min_length {
            return Err(LintError::new(LintErrorKind::IbanTooShort, 0, len));
        }
        let country = &data[..len.min(2)];
        if country.len() != 2 || !sorted_contains(ISO3166_ALPHA2, country) {
            return Err(LintError::new(
                LintErrorKind::IllegalIbanCountryCode,
                0,
                country.len(),
            ));
        }
        // A low configured minimum must still leave room for the check digits.
        if len < 4 {
            return Err(LintError::new(LintErrorKind::IbanTooShort, 0, len));
        }
        // Offsets 2-3 are reached last by the checksum; validate them first.
        let check = &data[2..4];
        let is_iban_char = |b: &u8| b.is_ascii_digit() || b.is_ascii_uppercase();
        if let Some(pos) = check.iter().position(|b| !is_iban_char(b)) {
            return Err(LintError::new(
                LintErrorKind::InvalidIbanCharacter,
                2 + pos,
                1,
            ));
        }
        match iban_mod97(data) {
            Err(pos) => Err(LintError::new(LintErrorKind::InvalidIbanCharacter, pos, 1)),
            Ok(1) => Ok(()),
            Ok(_) => Err(LintError::new(LintErrorKind::IncorrectIbanChecksum, 2, 2)),
        }
    }
}
