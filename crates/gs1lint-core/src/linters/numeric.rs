//! Numeric values: enumerated flags, bounded coordinates and counted
//! sequences.

use std::cmp::Ordering;

use super::{digit_value, require_digits};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};

fn is_all_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&b| b == b'0')
}

/// Compares two digit strings of any length by numeric value.
fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    let strip = |d: &[u8]| -> usize { d.iter().take_while(|&&b| b == b'0').count() };
    let a = &a[strip(a)..];
    let b = &b[strip(b)..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// A single character from `allowed`, else `kind` over the whole value.
fn one_of(data: &[u8], allowed: &[u8], kind: LintErrorKind) -> LintResult {
    match data {
        [c] if allowed.contains(c) => Ok(()),
        _ => Err(LintError::new(kind, 0, data.len())),
    }
}

/// A ten-digit coordinate with an inclusive upper bound.
fn coordinate(
    data: &[u8],
    max: u64,
    bad_length: LintErrorKind,
    bad_value: LintErrorKind,
) -> LintResult {
    if data.len() != 10 {
        return Err(LintError::new(bad_length, 0, data.len()));
    }
    require_digits(data)?;
    if digit_value(data) > max {
        return Err(LintError::new(bad_value, 0, 10));
    }
    Ok(())
}

/// Digits, not all of them zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero;

impl Linter for NonZero {
    fn name(&self) -> &'static str {
        "nonzero"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        require_digits(data)?;
        if is_all_zero(data) {
            return Err(LintError::new(LintErrorKind::IllegalZeroValue, 0, data.len()));
        }
        Ok(())
    }
}

/// Digits without a leading zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoZeroPrefix;

impl Linter for NoZeroPrefix {
    fn name(&self) -> &'static str {
        "nozeroprefix"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        require_digits(data)?;
        if data.first() == Some(&b'0') {
            return Err(LintError::new(LintErrorKind::IllegalZeroPrefix, 0, 1));
        }
        Ok(())
    }
}

/// Exactly `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Linter for Zero {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        one_of(data, b"0", LintErrorKind::NotZero)
    }
}

/// `0` or `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNo;

impl Linter for YesNo {
    fn name(&self) -> &'static str {
        "yesno"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        one_of(data, b"01", LintErrorKind::NotZeroOrOne)
    }
}

/// Roll winding direction: `0` face out, `1` face in, `9` undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct Winding;

impl Linter for Winding {
    fn name(&self) -> &'static str {
        "winding"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        one_of(data, b"019", LintErrorKind::InvalidWindingDirection)
    }
}

/// Latitude as ten digits, `0000000000`-`1800000000` (offset by 90 degrees).
#[derive(Debug, Clone, Copy, Default)]
pub struct Latitude;

impl Linter for Latitude {
    fn name(&self) -> &'static str {
        "latitude"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        coordinate(
            data,
            1_800_000_000,
            LintErrorKind::InvalidLatitudeLength,
            LintErrorKind::InvalidLatitude,
        )
    }
}

/// Longitude as ten digits, `0000000000`-`3599999999` (offset by 180
/// degrees).
#[derive(Debug, Clone, Copy, Default)]
pub struct Longitude;

impl Linter for Longitude {
    fn name(&self) -> &'static str {
        "longitude"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        coordinate(
            data,
            3_599_999_999,
            LintErrorKind::InvalidLongitudeLength,
            LintErrorKind::InvalidLongitude,
        )
    }
}

/// Piece number followed by total count, both halves of equal length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceOfTotal;

impl Linter for PieceOfTotal {
    fn name(&self) -> &'static str {
        "pieceoftotal"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if data.is_empty() || data.len() % 2 != 0 {
            return Err(LintError::new(
                LintErrorKind::InvalidLengthForPieceOfTotal,
                0,
                data.len(),
            ));
        }
        require_digits(data)?;
        let half = data.len() / 2;
        let (piece, total) = data.split_at(half);
        if is_all_zero(piece) {
            return Err(LintError::new(LintErrorKind::ZeroPieceNumber, 0, half));
        }
        if is_all_zero(total) {
            return Err(LintError::new(LintErrorKind::ZeroTotalPieces, half, half));
        }
        if cmp_digits(piece, total) == Ordering::Greater {
            return Err(LintError::new(
                LintErrorKind::PieceNumberExceedsTotal,
                0,
                data.len(),
            ));
        }
        Ok(())
    }
}

/// Position in a sequence as `N/M`, with `0 < N <= M`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosInSeqSlash;

impl Linter for PosInSeqSlash {
    fn name(&self) -> &'static str {
        "posinseqslash"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        let malformed = LintError::new(LintErrorKind::PositionInSequenceMalformed, 0, data.len());
        let slash = data.iter().position(|&b| b == b'/').ok_or(malformed)?;
        let (position, end) = (&data[..slash], &data[slash + 1..]);
        if position.is_empty() || end.is_empty() {
            return Err(malformed);
        }
        require_digits(position)?;
        require_digits(end).map_err(|err| err.shifted(slash + 1))?;
        if is_all_zero(position) {
            return Err(LintError::new(LintErrorKind::IllegalZeroValue, 0, slash));
        }
        if is_all_zero(end) {
            return Err(LintError::new(
                LintErrorKind::IllegalZeroValue,
                slash + 1,
                end.len(),
            ));
        }
        if cmp_digits(position, end) == Ordering::Greater {
            return Err(LintError::new(
                LintErrorKind::PositionExceedsEnd,
                0,
                data.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_fail, assert_pass};

    #[test]
    fn cmp_digits_ignores_leading_zeros() {
        assert_eq!(cmp_digits(b"007", b"7"), Ordering::Equal);
        assert_eq!(cmp_digits(b"010", b"9"), Ordering::Greater);
        assert_eq!(cmp_digits(b"0", b"000"), Ordering::Equal);
        assert_eq!(cmp_digits(b"12", b"21"), Ordering::Less);
    }

    #[test]
    fn nonzero_values() {
        assert_pass(&NonZero, "1");
        assert_pass(&NonZero, "0001");
        assert_fail(&NonZero, "*000*", LintErrorKind::IllegalZeroValue);
        assert_fail(&NonZero, "0*A*0", LintErrorKind::NonDigitCharacter);
    }

    #[test]
    fn nozeroprefix_values() {
        assert_pass(&NoZeroPrefix, "");
        assert_pass(&NoZeroPrefix, "10");
        assert_pass(&NoZeroPrefix, "1234567890");
        assert_fail(&NoZeroPrefix, "*0*", LintErrorKind::IllegalZeroPrefix);
        assert_fail(&NoZeroPrefix, "*0*123", LintErrorKind::IllegalZeroPrefix);
        assert_fail(&NoZeroPrefix, "*A*999", LintErrorKind::NonDigitCharacter);
        assert_fail(&NoZeroPrefix, "999*A*", LintErrorKind::NonDigitCharacter);
        // Digits are checked first, so a leading zero does not mask a later
        // non-digit.
        assert_fail(&NoZeroPrefix, "0*A*", LintErrorKind::NonDigitCharacter);
    }

    #[test]
    fn single_character_flags() {
        assert_pass(&Zero, "0");
        assert_fail(&Zero, "*1*", LintErrorKind::NotZero);
        assert_fail(&Zero, "*00*", LintErrorKind::NotZero);
        assert_fail(&Zero, "**", LintErrorKind::NotZero);

        assert_pass(&YesNo, "0");
        assert_pass(&YesNo, "1");
        assert_fail(&YesNo, "*2*", LintErrorKind::NotZeroOrOne);
        assert_fail(&YesNo, "*01*", LintErrorKind::NotZeroOrOne);

        assert_pass(&Winding, "9");
        assert_fail(&Winding, "*2*", LintErrorKind::InvalidWindingDirection);
    }

    #[test]
    fn coordinates() {
        assert_pass(&Latitude, "0000000000");
        assert_pass(&Latitude, "1800000000");
        assert_fail(&Latitude, "*1800000001*", LintErrorKind::InvalidLatitude);
        assert_fail(&Latitude, "*180000000*", LintErrorKind::InvalidLatitudeLength);
        assert_fail(&Latitude, "18000*A*0000", LintErrorKind::NonDigitCharacter);

        assert_pass(&Longitude, "3599999999");
        assert_fail(&Longitude, "*3600000000*", LintErrorKind::InvalidLongitude);
        assert_fail(&Longitude, "*36000000000*", LintErrorKind::InvalidLongitudeLength);
    }

    #[test]
    fn piece_of_total() {
        assert_pass(&PieceOfTotal, "11");
        assert_pass(&PieceOfTotal, "0199");
        assert_pass(&PieceOfTotal, "9999");
        assert_fail(&PieceOfTotal, "**", LintErrorKind::InvalidLengthForPieceOfTotal);
        assert_fail(&PieceOfTotal, "*123*", LintErrorKind::InvalidLengthForPieceOfTotal);
        assert_fail(&PieceOfTotal, "1*A*", LintErrorKind::NonDigitCharacter);
        assert_fail(&PieceOfTotal, "*00*12", LintErrorKind::ZeroPieceNumber);
        assert_fail(&PieceOfTotal, "01*00*", LintErrorKind::ZeroTotalPieces);
        assert_fail(&PieceOfTotal, "*1009*", LintErrorKind::PieceNumberExceedsTotal);
    }

    #[test]
    fn position_in_sequence() {
        assert_pass(&PosInSeqSlash, "1/1");
        assert_pass(&PosInSeqSlash, "3/12");
        assert_pass(&PosInSeqSlash, "007/7");
        assert_fail(&PosInSeqSlash, "*12*", LintErrorKind::PositionInSequenceMalformed);
        assert_fail(&PosInSeqSlash, "*/1*", LintErrorKind::PositionInSequenceMalformed);
        assert_fail(&PosInSeqSlash, "*1/*", LintErrorKind::PositionInSequenceMalformed);
        assert_fail(&PosInSeqSlash, "**", LintErrorKind::PositionInSequenceMalformed);
        assert_fail(&PosInSeqSlash, "*A*/1", LintErrorKind::NonDigitCharacter);
        assert_fail(&PosInSeqSlash, "1/1*/*1", LintErrorKind::NonDigitCharacter);
        assert_fail(&PosInSeqSlash, "*00*/1", LintErrorKind::IllegalZeroValue);
        assert_fail(&PosInSeqSlash, "1/*0*", LintErrorKind::IllegalZeroValue);
        assert_fail(&PosInSeqSlash, "*10/9*", LintErrorKind::PositionExceedsEnd);
    }
}
