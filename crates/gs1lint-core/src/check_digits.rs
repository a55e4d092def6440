//! Pure check-digit computations shared by the checksum linters.
//!
//! All functions are zero-allocation and operate directly on byte slices.
//! Character validation is the caller's job except where the algorithm
//! interleaves it with accumulation ([`iban_mod97`]).
//!
//! # References
//!
//! - GS1 General Specifications 7.9.1, standard check digit calculation
//! - GS1 General Specifications 7.9.5, check character pair calculation
//! - ISO 13616 / ISO 7064 MOD 97-10 for IBAN

use crate::charset::{CSET32_CHARS, cset82_value};

/// Ascending primes used as weights for the check character pair, applied
/// from the rightmost body character leftwards.
pub const CHECK_PAIR_PRIMES: [u16; 97] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, //
    59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131, //
    137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, //
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307, 311, //
    313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, //
    419, 421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, //
    509,
];

/// Computes the GS1 standard check digit for a body of ASCII digits.
///
/// **Pre-condition:** every byte of `body` is an ASCII digit.
///
/// # Algorithm
///
/// Weights alternate 3, 1, 3, … starting from the rightmost body digit. The
/// check digit `d` satisfies `(sum + d) mod 10 == 0`, i.e.
/// `d == (10 - (sum mod 10)) mod 10`.
///
/// # Examples
///
/// ```
/// use gs1lint_core::check_digits::gs1_check_digit;
///
/// assert_eq!(gs1_check_digit(b"061414100041"), b'8');
/// assert_eq!(gs1_check_digit(b""), b'0');
/// ```
pub fn gs1_check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, byte)| {
            let digit = u32::from(byte.wrapping_sub(b'0') % 10);
            if i % 2 == 0 { digit * 3 } else { digit }
        })
        .sum();
    // Always below 10, so the narrowing is exact.
    b'0' + ((10 - sum % 10) % 10) as u8
}

/// Verifies a digit string whose last digit is a GS1 check digit.
///
/// **Pre-condition:** every byte of `data` is an ASCII digit. An empty string
/// is never valid.
///
/// # Examples
///
/// ```
/// use gs1lint_core::check_digits::gs1_mod10;
///
/// assert!(gs1_mod10(b"0614141000418"));
/// assert!(!gs1_mod10(b"0614141000419"));
/// ```
pub fn gs1_mod10(data: &[u8]) -> bool {
    match data.split_last() {
        Some((&check, body)) => gs1_check_digit(body) == check,
        None => false,
    }
}

/// Computes the GS1 check character pair for a CSET 82 body.
///
/// Returns `None` if `body` contains a character outside CSET 82 or is longer
/// than [`CHECK_PAIR_PRIMES`] allows.
///
/// # Examples
///
/// ```
/// use gs1lint_core::check_digits::check_character_pair;
///
/// assert_eq!(check_character_pair(b"1987654Ad4X4bL5ttr2310c"), Some(*b"2K"));
/// ```
pub fn check_character_pair(body: &[u8]) -> Option<[u8; 2]> {
    let n = body.len();
    if n > CHECK_PAIR_PRIMES.len() {
        return None;
    }
    let mut sum: u32 = 0;
    for (i, &byte) in body.iter().enumerate() {
        let value = u32::from(cset82_value(byte)?);
        sum += value * u32::from(CHECK_PAIR_PRIMES[n - 1 - i]);
    }
    let sum = (sum % 1021) as usize;
    Some([CSET32_CHARS[sum >> 5], CSET32_CHARS[sum & 31]])
}

/// Character values for the IBAN checksum, offset by one so that zero marks
/// a character outside the IBAN alphabet.
const IBAN_WEIGHTS: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut c = 0;
    while c < 10 {
        table[b'0' as usize + c] = c as u8 + 1;
        c += 1;
    }
    let mut c = 0;
    while c < 26 {
        table[b'A' as usize + c] = c as u8 + 11;
        c += 1;
    }
    table
};

/// Computes the IBAN MOD 97-10 remainder of `data`.
///
/// Accumulation starts at offset 4 and wraps around to the start, finishing
/// just before offset 4 again, which is the ISO 13616 rearrangement done in
/// place. Digits contribute one decimal digit and letters `A`-`Z` two
/// (`A` = 10 … `Z` = 35). A valid IBAN yields a remainder of exactly 1.
///
/// # Errors
///
/// Returns the offset of the first character outside `0-9A-Z`, in
/// accumulation order.
///
/// # Examples
///
/// ```
/// use gs1lint_core::check_digits::iban_mod97;
///
/// assert_eq!(iban_mod97(b"BE71096123456769"), Ok(1));
/// assert_eq!(iban_mod97(b"BE71096123456760"), Ok(49));
/// assert_eq!(iban_mod97(b"BE7109612345676x"), Err(15));
/// ```
pub fn iban_mod97(data: &[u8]) -> Result<u32, usize> {
    let pivot = data.len().min(4);
    let mut csum: u32 = 0;
    for pos in (pivot..data.len()).chain(0..pivot) {
        let weight = IBAN_WEIGHTS[usize::from(data[pos])];
        if weight == 0 {
            return Err(pos);
        }
        let scale = if weight <= 10 { 10 } else { 100 };
        csum = (csum * scale + u32::from(weight - 1)) % 97;
    }
    Ok(csum)
}
