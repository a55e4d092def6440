//! Name-to-linter resolution.
//!
//! [`REGISTRY`] maps every linter name to its implementation and is sorted
//! strictly ascending by name; a `const` assertion rejects the build
//! otherwise, so [`resolve`] binary-searches it without re-checking.
//!
//! [`Dictionary`] binds a [`LintConfig`] and a [`LookupSource`] once, and
//! hands out [`BoundLinter`]s that lint values under that context.
use std::fmt;

use crate::config::LintConfig;
use crate::external::{BuiltinTables, LookupSource};
use crate::lint::{LintContext, LintResult, Linter, until_nul};
use crate::linters::{
    CouponCode, CouponPosOffer, Cset39, Cset64, Cset82, CsetNumeric, Csum, CsumAlpha, HasNonDigit,
    Hh, HhMi, Hyphen, Iban, ImporterIdx, Iso3166, Iso3166Alpha2, Iso3166With999, Iso4217,
    Iso5218, Key, KeyOff1, Latitude, Longitude, MediaType, Mi, NoZeroPrefix, NonZero, PackageType,
    PcEnc, PieceOfTotal, PosInSeqSlash, Ss, Winding, YesNo, YyMmD0, YyMmDd, YyyyMmD0, YyyyMmDd,
    Zero,
};
use crate::lookup::{binary_search_by_key, bytes_lt};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Every registered linter, keyed by name, strictly ascending.
pub const REGISTRY: &[(&str, &dyn Linter)] = &[
    ("couponcode", &CouponCode),
    ("couponposoffer", &CouponPosOffer),
    ("cset39", &Cset39),
    ("cset64", &Cset64),
    ("cset82", &Cset82),
    ("csetnumeric", &CsetNumeric),
    ("csum", &Csum),
    ("csumalpha", &CsumAlpha),
    ("hasnondigit", &HasNonDigit),
    ("hh", &Hh),
    ("hhmi", &HhMi),
    ("hyphen", &Hyphen),
    ("iban", &Iban),
    ("importeridx", &ImporterIdx),
    ("iso3166", &Iso3166),
    ("iso3166999", &Iso3166With999),
    ("iso3166alpha2", &Iso3166Alpha2),
    ("iso4217", &Iso4217),
    ("iso5218", &Iso5218),
    ("key", &Key),
    ("keyoff1", &KeyOff1),
    ("latitude", &Latitude),
    ("longitude", &Longitude),
    ("mediatype", &MediaType),
    ("mi", &Mi),
    ("nonzero", &NonZero),
    ("nozeroprefix", &NoZeroPrefix),
    ("packagetype", &PackageType),
    ("pcenc", &PcEnc),
    ("pieceoftotal", &PieceOfTotal),
    ("posinseqslash", &PosInSeqSlash),
    ("ss", &Ss),
    ("winding", &Winding),
    ("yesno", &YesNo),
    ("yymmd0", &YyMmD0),
    ("yymmdd", &YyMmDd),
    ("yyyymmd0", &YyyyMmD0),
    ("yyyymmdd", &YyyyMmDd),
    ("zero", &Zero),
];

const fn registry_is_sorted(registry: &[(&str, &dyn Linter)]) -> bool {
    let mut i = 1;
    while i < registry.len() {
        if !bytes_lt(registry[i - 1].0.as_bytes(), registry[i].0.as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    registry_is_sorted(REGISTRY),
    "REGISTRY must be strictly ascending"
);

/// Names of every registered linter, in ascending order.
pub fn linter_names() -> impl ExactSizeIterator<Item = &'static str> {
    REGISTRY.iter().map(|&(name, _)| name)
}

// ---------------------------------------------------------------------------
// UnknownLinter
// ---------------------------------------------------------------------------

/// A linter name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLinter {
    /// The name that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnknownLinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown linter: {:?}", self.name)
    }
}

impl std::error::Error for UnknownLinter {}

/// Resolves a linter by exact name.
///
/// # Errors
///
/// Returns [`UnknownLinter`] if no linter is registered under `name`.
///
/// # Examples
///
/// ```
/// use gs1lint_core::resolve;
///
/// assert_eq!(resolve("csum").map(|l| l.name()), Ok("csum"));
/// assert!(resolve("CSUM").is_err());
/// ```
pub fn resolve(name: &str) -> Result<&'static dyn Linter, UnknownLinter> {
    match binary_search_by_key(REGISTRY, name.as_bytes(), |entry| entry.0.as_bytes()) {
        Some(index) => Ok(REGISTRY[index].1),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(name, "unknown linter name");
            Err(UnknownLinter {
                name: name.to_owned(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

static BUILTIN: BuiltinTables = BuiltinTables;

/// A configuration and lookup source, bound once and shared by every linter
/// resolved through it.
///
/// A dictionary is `Send + Sync` whenever its lookup source is `Sync`, so one
/// instance can serve any number of threads. [`Dictionary::new`] uses the
/// built-in tables, which are.
pub struct Dictionary<'a, L: LookupSource = BuiltinTables> {
    config: LintConfig,
    lookup: &'a L,
}

impl Dictionary<'static> {
    /// A dictionary with the default configuration and the built-in tables.
    pub fn new() -> Self {
        Self {
            config: LintConfig::default(),
            lookup: &BUILTIN,
        }
    }
}

impl Default for Dictionary<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, L: LookupSource> Dictionary<'a, L> {
    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(self, config: LintConfig) -> Self {
        Self { config, ..self }
    }

    /// Replaces the lookup source used for media types and company prefixes.
    #[must_use]
    pub fn with_lookup<'b, M: LookupSource>(self, lookup: &'b M) -> Dictionary<'b, M> {
        Dictionary {
            config: self.config,
            lookup,
        }
    }

    /// The bound configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Resolves `name` to a linter bound to this dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLinter`] if no linter is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<BoundLinter<'_, L>, UnknownLinter> {
        let linter = resolve(name)?;
        Ok(BoundLinter {
            linter,
            config: &self.config,
            lookup: self.lookup,
        })
    }
}

impl<L: LookupSource> Clone for Dictionary<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: LookupSource> Copy for Dictionary<'_, L> {}

impl<L: LookupSource> fmt::Debug for Dictionary<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("config", &self.config)
            .field("lookup", &self.lookup.name())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// BoundLinter
// ---------------------------------------------------------------------------

/// A resolved linter together with the configuration and lookup source it
/// runs under.
pub struct BoundLinter<'d, L: LookupSource = BuiltinTables> {
    linter: &'static dyn Linter,
    config: &'d LintConfig,
    lookup: &'d L,
}

impl<L: LookupSource> Clone for BoundLinter<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: LookupSource> Copy for BoundLinter<'_, L> {}

impl<L: LookupSource> fmt::Debug for BoundLinter<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundLinter")
            .field("linter", &self.linter.name())
            .field("config", self.config)
            .field("lookup", &self.lookup.name())
            .finish()
    }
}

impl<L: LookupSource> BoundLinter<'_, L> {
    /// The registered name of the linter.
    pub fn name(&self) -> &'static str {
        self.linter.name()
    }

    /// Lints exactly `data`, embedded NUL bytes included.
    ///
    /// # Errors
    ///
    /// Returns the first [`LintError`](crate::LintError) the linter finds.
    pub fn lint(&self, data: &[u8]) -> LintResult {
        let ctx = LintContext {
            config: self.config,
            lookup: self.lookup,
        };
        let result = self.linter.lint(data, &ctx);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            linter = self.linter.name(),
            len = data.len(),
            ok = result.is_ok(),
            "lint"
        );
        result
    }

    /// Lints `buf` up to its first NUL byte.
    ///
    /// # Errors
    ///
    /// As for [`BoundLinter::lint`]; spans are relative to the start of `buf`.
    pub fn lint_nul_terminated(&self, buf: &[u8]) -> LintResult {
        self.lint(until_nul(buf))
    }

    /// Lints the UTF-8 bytes of `value`.
    ///
    /// # Errors
    ///
    /// As for [`BoundLinter::lint`].
    pub fn lint_str(&self, value: &str) -> LintResult {
        self.lint(value.as_bytes())
    }

    /// Returns `true` if `data` passes, discarding any error span.
    pub fn is_valid(&self, data: &[u8]) -> bool {
        self.lint(data).is_ok()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::external::LookupOutcome;
    use crate::kinds::LintErrorKind;
    use crate::lint::LintError;
    use crate::test_helpers::ScriptedLookup;

    #[test]
    fn registry_names_match_linters() {
        for &(name, linter) in REGISTRY {
            assert_eq!(name, linter.name());
        }
    }

    #[test]
    fn resolves_every_registered_name() {
        for name in linter_names() {
            assert_eq!(resolve(name).map(|l| l.name()), Ok(name));
        }
        assert_eq!(linter_names().len(), 39);
    }

    #[test]
    fn unknown_names_are_distinct_errors() {
        for name in ["", "a", "csu", "csum ", "zzz", "mm", "Csum"] {
            assert_eq!(
                resolve(name).map(|l| l.name()),
                Err(UnknownLinter {
                    name: name.to_owned()
                })
            );
        }
        let err = Dictionary::new()
            .resolve("nope")
            .map(|l| l.name())
            .expect_err("unregistered");
        assert_eq!(err.to_string(), "unknown linter: \"nope\"");
    }

    #[test]
    fn calling_conventions_agree() {
        let dictionary = Dictionary::new();
        let mi = dictionary.resolve("mi").expect("registered");
        assert_eq!(mi.lint(b"59"), Ok(()));
        assert_eq!(mi.lint_nul_terminated(b"59\0junk"), Ok(()));
        assert_eq!(mi.lint_str("59"), Ok(()));
        assert_eq!(
            mi.lint(b"59\0"),
            Err(LintError::new(LintErrorKind::MinuteTooLong, 0, 3))
        );
        assert!(!mi.is_valid(b"60"));
    }

    #[test]
    fn dictionary_config_reaches_linters() {
        let strict = Dictionary::new().with_config(LintConfig {
            iban_min_length: 16,
            ..LintConfig::default()
        });
        let lenient = Dictionary::new();
        let iban = b"BE71096123456769";
        assert!(lenient.resolve("iban").is_ok_and(|l| l.is_valid(iban)));
        assert!(strict.resolve("iban").is_ok_and(|l| !l.is_valid(iban)));
        assert_eq!(strict.config().iban_min_length, 16);
    }

    #[test]
    fn builtin_dictionary_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary<'static>>();
        assert_send_sync::<BoundLinter<'static>>();
        assert_send_sync::<Dictionary<'static, crate::FnLookup>>();
    }

    #[test]
    fn one_dictionary_serves_many_threads() {
        let dictionary = Dictionary::new().with_config(LintConfig {
            iban_min_length: 16,
            ..LintConfig::default()
        });
        let values: [&[u8]; 4] = [
            b"0614141000418",
            b"0614141000419",
            b"95012345678903",
            b"X",
        ];
        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = values
                .iter()
                .map(|value| {
                    let dictionary = &dictionary;
                    scope.spawn(move || {
                        dictionary.resolve("csum").is_ok_and(|l| l.is_valid(value))
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("linter thread"))
                .collect()
        });
        assert_eq!(results, [true, false, true, false]);

        let csum = dictionary.resolve("csum").expect("registered");
        std::thread::scope(|scope| {
            scope.spawn(|| assert!(csum.is_valid(b"0614141000418")));
            scope.spawn(|| assert!(!csum.is_valid(b"0614141000419")));
        });
    }

    #[test]
    fn dictionary_lookup_reaches_linters() {
        let offline = ScriptedLookup::new(LookupOutcome::Offline);
        let dictionary = Dictionary::new().with_lookup(&offline);
        let result = dictionary.resolve("mediatype").map(|l| l.lint(b"01"));
        assert_eq!(
            result,
            Ok(Err(LintError::new(
                LintErrorKind::MediaTypeDatasourceOffline,
                0,
                2
            )))
        );
        assert_eq!(offline.calls(), 1);
    }
}
