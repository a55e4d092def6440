//! Value generators with valid check digits, and single-byte corruption.

use rand::Rng;
use rand::rngs::StdRng;

use super::ValueKind;

const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const CSET82: &[u8] =
    b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const IBAN_COUNTRIES: [&[u8; 2]; 6] = [b"BE", b"DE", b"FR", b"GB", b"NL", b"SE"];

fn digit(rng: &mut StdRng) -> u8 {
    b'0' + rng.gen_range(0..10)
}

/// Computes the GS1 Mod-10 check digit for `body`.
fn gs1_check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            u32::from(d - b'0') * weight
        })
        .sum();
    let check = ((10 - sum % 10) % 10) as u8;
    b'0' + check
}

/// Generates a GTIN-8, -12, -13 or -14 with a correct check digit.
pub fn gen_gtin(rng: &mut StdRng) -> Vec<u8> {
    let len = [8, 12, 13, 14][rng.gen_range(0..4)];
    let mut value: Vec<u8> = (1..len).map(|_| digit(rng)).collect();
    value.push(gs1_check_digit(&value));
    value
}

/// Computes the MOD 97 remainder of an alphanumeric string.
fn mod97_remainder(bytes: &[u8]) -> u64 {
    let mut remainder: u64 = 0;
    for byte in bytes {
        match byte {
            b'0'..=b'9' => {
                let digit = u64::from(byte - b'0');
                remainder = (remainder * 10 + digit) % 97;
            }
            b'A'..=b'Z' => {
                let value = u64::from(byte - b'A') + 10;
                remainder = (remainder * 100 + value) % 97;
            }
            _ => {}
        }
    }
    remainder
}

/// Generates an IBAN with correct MOD 97-10 check digits.
///
/// Algorithm: pick a country and a 12 to 26 character `[A-Z0-9]` BBAN, then
/// compute the check digits by reversing the MOD 97-10 verification.
pub fn gen_iban(rng: &mut StdRng) -> Vec<u8> {
    let country = IBAN_COUNTRIES[rng.gen_range(0..IBAN_COUNTRIES.len())];
    let bban_len = rng.gen_range(12..=26);
    let bban: Vec<u8> = (0..bban_len)
        .map(|_| ALPHANUM[rng.gen_range(0..ALPHANUM.len())])
        .collect();

    let rearranged = [bban.as_slice(), country, b"00"].concat();
    let check = 98 - mod97_remainder(&rearranged);

    let mut value = country.to_vec();
    value.extend_from_slice(format!("{check:02}").as_bytes());
    value.extend_from_slice(&bban);
    value
}

/// Generates a `YYMMDD` date that exists in every century.
pub fn gen_yymmdd(rng: &mut StdRng) -> Vec<u8> {
    let yy: u8 = rng.gen_range(0..100);
    let mm: u8 = rng.gen_range(1..=12);
    let dd: u8 = rng.gen_range(1..=28);
    format!("{yy:02}{mm:02}{dd:02}").into_bytes()
}

/// Generates 1 to 20 CSET 82 characters.
pub fn gen_cset82(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(1..=20);
    (0..len)
        .map(|_| CSET82[rng.gen_range(0..CSET82.len())])
        .collect()
}

/// Changes one byte of a valid `value` so that its linter rejects it.
pub fn corrupt(rng: &mut StdRng, kind: ValueKind, value: &mut [u8]) {
    let (range, replacement) = match kind {
        // Any single-digit change alters a Mod-10 or MOD 97-10 checksum.
        ValueKind::Gtin => (0..value.len(), None),
        ValueKind::Iban => (2..4, None),
        ValueKind::Date => (2..3, Some(b'2')),
        ValueKind::Cset82 => (0..value.len(), Some(b'#')),
    };
    let pos = rng.gen_range(range);
    value[pos] = match replacement {
        Some(byte) => byte,
        None => b'0' + (value[pos] - b'0' + rng.gen_range(1..10)) % 10,
    };
}
