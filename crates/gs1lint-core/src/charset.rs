//! Byte classification for the GS1 character sets.
//!
//! A single 256-entry table maps each byte to a set of class bits, so every
//! membership test is one load and one mask. Bytes outside 7-bit ASCII belong
//! to no class.

/// GS1 AI encodable character set 82.
pub const CSET82: u8 = 1 << 0;
/// GS1 AI encodable character set 39: `#`, `-`, `/`, digits and upper case.
pub const CSET39: u8 = 1 << 1;
/// File-safe, URI-safe base64 alphabet (RFC 4648 section 5), without padding.
pub const CSET64: u8 = 1 << 2;
/// The 32 characters used for GS1 check character pairs.
pub const CSET32: u8 = 1 << 3;
/// ASCII digits.
pub const DIGIT: u8 = 1 << 4;
/// ASCII hexadecimal digits, either case.
pub const HEX: u8 = 1 << 5;

/// Characters of CSET 82, in the order that defines their check-pair values.
pub const CSET82_CHARS: &[u8; 82] =
    b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Characters of CSET 32, indexed by check character value.
pub const CSET32_CHARS: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

const CSET39_CHARS: &[u8] = b"#-/0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const CSET64_CHARS: &[u8] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const HEX_CHARS: &[u8] = b"0123456789ABCDEFabcdef";

const fn mark(mut table: [u8; 256], chars: &[u8], class: u8) -> [u8; 256] {
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] |= class;
        i += 1;
    }
    table
}

const CLASSES: [u8; 256] = {
    let table = mark([0; 256], CSET82_CHARS, CSET82);
    let table = mark(table, CSET39_CHARS, CSET39);
    let table = mark(table, CSET64_CHARS, CSET64);
    let table = mark(table, CSET32_CHARS, CSET32);
    let table = mark(table, b"0123456789", DIGIT);
    mark(table, HEX_CHARS, HEX)
};

/// Value of each CSET 82 character plus one; zero marks a non-member.
const CSET82_VALUES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < CSET82_CHARS.len() {
        table[CSET82_CHARS[i] as usize] = i as u8 + 1;
        i += 1;
    }
    table
};

/// Returns `true` if `byte` belongs to any of the classes in `class`.
pub fn is(byte: u8, class: u8) -> bool {
    CLASSES[usize::from(byte)] & class != 0
}

/// Returns the offset of the first byte of `data` outside `class`.
///
/// # Examples
///
/// ```
/// use gs1lint_core::charset::{DIGIT, first_outside};
///
/// assert_eq!(first_outside(b"12a4", DIGIT), Some(2));
/// assert_eq!(first_outside(b"1234", DIGIT), None);
/// ```
pub fn first_outside(data: &[u8], class: u8) -> Option<usize> {
    data.iter().position(|&b| !is(b, class))
}

/// Returns the check-pair value (0-81) of a CSET 82 character.
pub fn cset82_value(byte: u8) -> Option<u8> {
    match CSET82_VALUES[usize::from(byte)] {
        0 => None,
        v => Some(v - 1),
    }
}
