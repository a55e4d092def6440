//! Pluggable lookup sources for the table checks that may live outside the
//! library.
//!
//! Two checks can be backed by an external authority: AIDC media types and
//! GS1 Company Prefixes. Linters consult them through the [`LookupSource`]
//! trait, which a [`Dictionary`](crate::Dictionary) receives as an injected
//! dependency, keeping `gs1lint-core` free of network or I/O dependencies.
//!
//! An external source may be unreachable. It then answers
//! [`LookupOutcome::Offline`], which linters report as a kind of its own so
//! callers can decide whether an unverifiable value is acceptable.

use crate::lookup::bitfield_contains;
use crate::tables::MEDIA_TYPES;

/// The answer of a lookup source for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupOutcome {
    /// The candidate is listed.
    Valid,
    /// The candidate is definitively not listed.
    Invalid,
    /// The authoritative source could not be reached; validity is unknown.
    Offline,
}

impl LookupOutcome {
    /// Converts the `(valid, offline)` flag pair used by plain lookup
    /// functions. `offline` takes precedence over `valid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1lint_core::LookupOutcome;
    ///
    /// assert_eq!(LookupOutcome::from_flags(true, false), LookupOutcome::Valid);
    /// assert_eq!(LookupOutcome::from_flags(false, false), LookupOutcome::Invalid);
    /// assert_eq!(LookupOutcome::from_flags(true, true), LookupOutcome::Offline);
    /// ```
    pub const fn from_flags(valid: bool, offline: bool) -> Self {
        if offline {
            Self::Offline
        } else if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    /// Returns `true` for [`LookupOutcome::Valid`].
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// An injected source for the pluggable table checks.
///
/// Every method has a default backed by the built-in tables, so an
/// implementation overrides only the checks it takes over. The trait is
/// object-safe: linters receive it as `&dyn LookupSource`.
///
/// Implementations need not be `Sync`; test doubles commonly keep call
/// counters in a [`Cell`](std::cell::Cell). A dictionary over such a source
/// stays on the thread that owns it.
pub trait LookupSource {
    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "builtin"
    }

    /// Checks a candidate AIDC media type.
    fn media_type(&self, candidate: &[u8]) -> LookupOutcome {
        builtin_media_type(candidate)
    }

    /// Checks a candidate GS1 Company Prefix.
    ///
    /// The candidate is the longest prefix the data could hold, not a prefix
    /// of known length; a source matches any registered prefix of it. There
    /// is no built-in prefix registry, so the default accepts everything.
    fn gcp(&self, candidate: &[u8]) -> LookupOutcome {
        let _ = candidate;
        LookupOutcome::Valid
    }
}

/// The built-in tables, with no external authority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinTables;

impl LookupSource for BuiltinTables {}

/// A plain lookup function reporting `(valid, offline)` for a candidate.
pub type LookupFn = fn(&[u8]) -> (bool, bool);

/// A [`LookupSource`] assembled from plain functions. Checks without a
/// function fall back to the built-in tables.
///
/// # Examples
///
/// ```
/// use gs1lint_core::{FnLookup, LookupOutcome, LookupSource};
///
/// fn registry_down(_: &[u8]) -> (bool, bool) {
///     (false, true)
/// }
///
/// let lookup = FnLookup { gcp: Some(registry_down), media_type: None };
/// assert_eq!(lookup.gcp(b"9501234"), LookupOutcome::Offline);
/// assert_eq!(lookup.media_type(b"01"), LookupOutcome::Valid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FnLookup {
    /// Replacement GS1 Company Prefix check.
    pub gcp: Option<LookupFn>,
    /// Replacement media type check.
    pub media_type: Option<LookupFn>,
}

impl LookupSource for FnLookup {
    fn name(&self) -> &str {
        "fn"
    }

    fn media_type(&self, candidate: &[u8]) -> LookupOutcome {
        match self.media_type {
            Some(f) => {
                let (valid, offline) = f(candidate);
                LookupOutcome::from_flags(valid, offline)
            }
            None => builtin_media_type(candidate),
        }
    }

    fn gcp(&self, candidate: &[u8]) -> LookupOutcome {
        match self.gcp {
            Some(f) => {
                let (valid, offline) = f(candidate);
                LookupOutcome::from_flags(valid, offline)
            }
            None => LookupOutcome::Valid,
        }
    }
}

/// The built-in media type check: exactly two digits naming an assigned or
/// locally usable media type.
pub fn builtin_media_type(candidate: &[u8]) -> LookupOutcome {
    let valid = match candidate {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            let value = usize::from(a - b'0') * 10 + usize::from(b - b'0');
            bitfield_contains(&MEDIA_TYPES, value)
        }
        _ => false,
    };
    LookupOutcome::from_flags(valid, false)
}

/// Emits a warning when `outcome` is offline and passes it through.
pub(crate) fn observe(
    source: &dyn LookupSource,
    what: &'static str,
    outcome: LookupOutcome,
) -> LookupOutcome {
    if outcome == LookupOutcome::Offline {
        #[cfg(feature = "tracing")]
        tracing::warn!(source = source.name(), what, "lookup source offline");
        #[cfg(not(feature = "tracing"))]
        let _ = (source, what);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_media_type_ranges() {
        assert_eq!(builtin_media_type(b"00"), LookupOutcome::Invalid);
        assert_eq!(builtin_media_type(b"01"), LookupOutcome::Valid);
        assert_eq!(builtin_media_type(b"10"), LookupOutcome::Valid);
        assert_eq!(builtin_media_type(b"11"), LookupOutcome::Invalid);
        assert_eq!(builtin_media_type(b"79"), LookupOutcome::Invalid);
        assert_eq!(builtin_media_type(b"80"), LookupOutcome::Valid);
        assert_eq!(builtin_media_type(b"99"), LookupOutcome::Valid);
    }

    #[test]
    fn builtin_media_type_shape() {
        assert_eq!(builtin_media_type(b""), LookupOutcome::Invalid);
        assert_eq!(builtin_media_type(b"1"), LookupOutcome::Invalid);
        assert_eq!(builtin_media_type(b"001"), LookupOutcome::Invalid);
        assert_eq!(builtin_media_type(b"0A"), LookupOutcome::Invalid);
    }

    #[test]
    fn builtin_gcp_accepts_everything() {
        assert_eq!(BuiltinTables.gcp(b""), LookupOutcome::Valid);
        assert_eq!(BuiltinTables.gcp(b"0000"), LookupOutcome::Valid);
    }

    #[test]
    fn fn_lookup_translates_flags() {
        fn only_nines(candidate: &[u8]) -> (bool, bool) {
            (candidate.starts_with(b"9"), false)
        }
        let lookup = FnLookup {
            gcp: Some(only_nines),
            media_type: Some(only_nines),
        };
        assert_eq!(lookup.gcp(b"950"), LookupOutcome::Valid);
        assert_eq!(lookup.gcp(b"050"), LookupOutcome::Invalid);
        assert_eq!(lookup.media_type(b"01"), LookupOutcome::Invalid);
    }
}
