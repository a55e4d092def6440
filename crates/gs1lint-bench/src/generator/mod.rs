//! Element value corpus generator.
//!
//! Produces batches of values for one linter. Every value is generated
//! valid; a seeded fraction then has a single byte changed so that the
//! linter rejects it.

pub mod values;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the corpus generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of values to generate.
    pub count: usize,
    /// Fraction of values to corrupt (0.0-1.0).
    pub corrupt_fraction: f64,
}

/// Predefined corpus sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 values.
    Small,
    /// 10 000 values.
    Medium,
    /// 100 000 values.
    Large,
}

impl SizeTier {
    /// Returns the generator configuration for this tier, with a tenth of
    /// the values corrupted.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            Self::Small => 100,
            Self::Medium => 10_000,
            Self::Large => 100_000,
        };
        GeneratorConfig {
            seed,
            count,
            corrupt_fraction: 0.1,
        }
    }
}

/// The kind of element value to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// GTIN-8/12/13/14 with a correct check digit.
    Gtin,
    /// IBAN with correct MOD 97-10 check digits.
    Iban,
    /// `YYMMDD` date.
    Date,
    /// CSET 82 text of 1 to 20 characters.
    Cset82,
}

impl ValueKind {
    /// Every kind.
    pub const ALL: [ValueKind; 4] = [Self::Gtin, Self::Iban, Self::Date, Self::Cset82];

    /// Name of the linter that checks this kind of value.
    pub fn linter(self) -> &'static str {
        match self {
            Self::Gtin => "csum",
            Self::Iban => "iban",
            Self::Date => "yymmdd",
            Self::Cset82 => "cset82",
        }
    }

    fn generate(self, rng: &mut StdRng) -> Vec<u8> {
        match self {
            Self::Gtin => values::gen_gtin(rng),
            Self::Iban => values::gen_iban(rng),
            Self::Date => values::gen_yymmdd(rng),
            Self::Cset82 => values::gen_cset82(rng),
        }
    }
}

/// A batch of generated values for one linter.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// What the values are.
    pub kind: ValueKind,
    /// The values, in generation order.
    pub values: Vec<Vec<u8>>,
    /// Indices into `values` of the corrupted values.
    pub corrupted: Vec<usize>,
}

impl Corpus {
    /// Total number of bytes across all values.
    pub fn total_bytes(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }
}

/// Generates a corpus of `kind` values from `config`.
///
/// The same configuration always yields the same corpus.
pub fn generate_corpus(kind: ValueKind, config: &GeneratorConfig) -> Corpus {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut values = Vec::with_capacity(config.count);
    let mut corrupted = Vec::new();
    for index in 0..config.count {
        let mut value = kind.generate(&mut rng);
        if rng.gen_bool(config.corrupt_fraction.clamp(0.0, 1.0)) {
            values::corrupt(&mut rng, kind, &mut value);
            corrupted.push(index);
        }
        values.push(value);
    }
    Corpus {
        kind,
        values,
        corrupted,
    }
}
