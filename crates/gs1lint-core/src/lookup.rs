//! Table search primitives shared by the table-backed linters.
//!
//! Two strategies are provided:
//!
//! - **Bitfield membership** for small dense integer domains (two- and
//!   three-digit codes). Bits are numbered most-significant first within each
//!   word, so bit `i` of a `u8` table lives in `table[i / 8] & (0x80 >> i % 8)`.
//! - **Binary search** over a strictly ascending table of byte strings,
//!   compared ordinally.
//!
//! Neither primitive allocates. The `const fn` helpers at the bottom of the
//! module let table definitions assert their own invariants at compile time.

use std::cmp::Ordering;

/// An unsigned integer usable as a bitfield word.
pub trait BitWord: Copy {
    /// Number of bits held by one word.
    const BITS: usize;

    /// Returns `true` if bit `bit` (0 = most significant) is set.
    fn is_set(self, bit: usize) -> bool;
}

impl BitWord for u8 {
    const BITS: usize = 8;

    fn is_set(self, bit: usize) -> bool {
        self & (0x80 >> bit) != 0
    }
}

impl BitWord for u16 {
    const BITS: usize = 16;

    fn is_set(self, bit: usize) -> bool {
        self & (0x8000 >> bit) != 0
    }
}

impl BitWord for u32 {
    const BITS: usize = 32;

    fn is_set(self, bit: usize) -> bool {
        self & (0x8000_0000 >> bit) != 0
    }
}

impl BitWord for u64 {
    const BITS: usize = 64;

    fn is_set(self, bit: usize) -> bool {
        self & (0x8000_0000_0000_0000 >> bit) != 0
    }
}

/// Tests membership of `index` in a packed bitfield.
///
/// # Panics
///
/// Panics if `index` lies beyond the last bit of `table`. Callers derive the
/// index from already-validated input, so an out-of-range index is a defect
/// in the calling linter, not bad data.
///
/// # Examples
///
/// ```
/// use gs1lint_core::lookup::bitfield_contains;
///
/// let table: [u8; 2] = [0b0100_0000, 0b0000_0001];
/// assert!(bitfield_contains(&table, 1));
/// assert!(bitfield_contains(&table, 15));
/// assert!(!bitfield_contains(&table, 0));
/// ```
pub fn bitfield_contains<W: BitWord>(table: &[W], index: usize) -> bool {
    let word = index / W::BITS;
    assert!(
        word < table.len(),
        "bitfield index {index} outside a table of {} bits",
        table.len() * W::BITS
    );
    table[word].is_set(index % W::BITS)
}

/// Binary search over a table sorted strictly ascending by `key`.
///
/// Returns the index of the entry whose key equals `needle`, if any. The
/// table's ordering is not re-checked here; tables declare it with
/// [`is_strictly_ascending`] at compile time.
pub fn binary_search_by_key<T>(
    table: &[T],
    needle: &[u8],
    key: impl Fn(&T) -> &[u8],
) -> Option<usize> {
    let mut s = 0;
    let mut e = table.len();
    while s < e {
        let m = s + (e - s) / 2;
        match key(&table[m]).cmp(needle) {
            Ordering::Less => s = m + 1,
            Ordering::Greater => e = m,
            Ordering::Equal => return Some(m),
        }
    }
    None
}

/// Returns `true` if `needle` is an entry of the sorted string `table`.
///
/// # Examples
///
/// ```
/// use gs1lint_core::lookup::sorted_contains;
///
/// const CODES: &[&str] = &["AD", "AE", "ZW"];
/// assert!(sorted_contains(CODES, b"AE"));
/// assert!(!sorted_contains(CODES, b"AF"));
/// ```
pub fn sorted_contains(table: &[&str], needle: &[u8]) -> bool {
    binary_search_by_key(table, needle, |entry| entry.as_bytes()).is_some()
}

// ---------------------------------------------------------------------------
// Compile-time table construction and invariants
// ---------------------------------------------------------------------------

/// Returns `true` if `a` orders strictly before `b`, byte by byte.
pub const fn bytes_lt(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

/// Returns `true` if `table` is strictly ascending by ordinal byte order,
/// which also rules out duplicates.
pub const fn is_strictly_ascending(table: &[&str]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if !bytes_lt(table[i - 1].as_bytes(), table[i].as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if the integer codes in `codes` are strictly ascending.
pub const fn codes_strictly_ascending(codes: &[u16]) -> bool {
    let mut i = 1;
    while i < codes.len() {
        if codes[i - 1] >= codes[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Packs a list of integer codes into an MSB-first `u64` bitfield.
///
/// Used in constant position, so a code that does not fit in `N` words
/// fails the build rather than a lookup.
pub const fn bitfield_from_codes<const N: usize>(codes: &[u16]) -> [u64; N] {
    let mut table = [0u64; N];
    let mut i = 0;
    while i < codes.len() {
        let code = codes[i] as usize;
        table[code / 64] |= 0x8000_0000_0000_0000 >> (code % 64);
        i += 1;
    }
    table
}
