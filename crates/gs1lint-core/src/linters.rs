//! The concrete linters, one zero-sized type per registered name.
//!
//! Each linter implements [`Linter`](crate::Linter) and is registered in
//! [`crate::dispatch::REGISTRY`]. Linters never allocate and never report more
//! than one error: the earliest, most specific failure wins.

pub mod charsets;
pub mod checksums;
pub mod codes;
pub mod coupon;
pub mod dates;
pub mod keys;
pub mod numeric;
pub mod times;

pub use charsets::{Cset39, Cset64, Cset82, CsetNumeric, HasNonDigit, Hyphen, ImporterIdx, PcEnc};
pub use checksums::{Csum, CsumAlpha, Iban};
pub use codes::{Iso3166, Iso3166Alpha2, Iso3166With999, Iso4217, Iso5218, MediaType, PackageType};
pub use coupon::{CouponCode, CouponPosOffer};
pub use dates::{YyMmD0, YyMmDd, YyyyMmD0, YyyyMmDd};
pub use keys::{Key, KeyOff1};
pub use numeric::{
    Latitude, Longitude, NoZeroPrefix, NonZero, PieceOfTotal, PosInSeqSlash, Winding, YesNo, Zero,
};
pub use times::{Hh, HhMi, Mi, Ss};

use crate::charset::{DIGIT, first_outside};
use crate::kinds::LintErrorKind;
use crate::lint::{LintError, LintResult};

/// Rejects the first byte of `data` that is not an ASCII digit.
pub(crate) fn require_digits(data: &[u8]) -> LintResult {
    match first_outside(data, DIGIT) {
        Some(pos) => Err(LintError::new(LintErrorKind::NonDigitCharacter, pos, 1)),
        None => Ok(()),
    }
}

/// Value of a short run of ASCII digits.
///
/// **Pre-condition:** `digits` holds only ASCII digits and fits in a `u64`.
pub(crate) fn digit_value(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + u64::from(d.wrapping_sub(b'0') % 10))
}

/// Rejects a value whose length differs from `expected`, choosing the kind
/// by direction. The span covers the whole value.
pub(crate) fn require_len(
    data: &[u8],
    expected: usize,
    too_short: LintErrorKind,
    too_long: LintErrorKind,
) -> LintResult {
    match data.len() {
        n if n < expected => Err(LintError::new(too_short, 0, n)),
        n if n > expected => Err(LintError::new(too_long, 0, n)),
        _ => Ok(()),
    }
}
