//! Property-based tests over every registered linter.
//!
//! Arbitrary byte strings stand in for an adversarial harness: every linter
//! must return the same outcome twice, keep error spans inside the value, and
//! agree across the explicit-length and NUL-terminated calling conventions,
//! under any configuration.
#![allow(clippy::expect_used)]

use gs1lint_core::{Dictionary, LintConfig, LintErrorKind, REGISTRY, linter_names};
use proptest::prelude::*;

/// Raw bytes, long digit runs (the coupon parsers only get past their first
/// check on digits), GS1-flavoured text and stubs of IBAN-like values.
fn arb_value() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..48),
        "[0-9]{0,90}".prop_map(String::into_bytes),
        "[0-9A-Za-z%/=_\\-]{0,40}".prop_map(String::into_bytes),
        "[A-Z]{2}[0-9A-Z]{0,3}".prop_map(String::into_bytes),
    ]
}

fn arb_linter() -> impl Strategy<Value = &'static str> {
    prop::sample::select(linter_names().collect::<Vec<_>>())
}

/// Any reference year, and IBAN minimums from none at all to the longest
/// IBAN in use.
fn arb_config() -> impl Strategy<Value = LintConfig> {
    (0u8..=99, 0usize..=34).prop_map(|(reference_year, iban_min_length)| LintConfig {
        reference_year,
        iban_min_length,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Error spans stay within the value; an empty value yields `(0, 0)`.
    #[test]
    fn spans_stay_in_bounds(
        name in arb_linter(),
        value in arb_value(),
        config in arb_config(),
    ) {
        let dictionary = Dictionary::new().with_config(config);
        let linter = dictionary.resolve(name).expect("registered");
        if let Err(err) = linter.lint(&value) {
            prop_assert!(
                err.span.is_valid_for(value.len()),
                "{name}: {err:?} for {} bytes", value.len()
            );
            prop_assert!(LintErrorKind::ALL.contains(&err.kind));
        }
    }

    /// The same value and configuration always give the same outcome.
    #[test]
    fn linting_is_deterministic(
        name in arb_linter(),
        value in arb_value(),
        config in arb_config(),
    ) {
        let dictionary = Dictionary::new().with_config(config);
        let linter = dictionary.resolve(name).expect("registered");
        prop_assert_eq!(linter.lint(&value), linter.lint(&value));
        prop_assert_eq!(linter.is_valid(&value), linter.lint(&value).is_ok());
    }

    /// A NUL-terminated buffer lints like its content before the NUL.
    #[test]
    fn nul_terminated_matches_explicit_length(
        name in arb_linter(),
        value in arb_value(),
        trailer in prop::collection::vec(any::<u8>(), 0..8),
        config in arb_config(),
    ) {
        let content: Vec<u8> = value.into_iter().take_while(|&b| b != 0).collect();
        let mut buf = content.clone();
        buf.push(0);
        buf.extend_from_slice(&trailer);

        let dictionary = Dictionary::new().with_config(config);
        let linter = dictionary.resolve(name).expect("registered");
        prop_assert_eq!(linter.lint_nul_terminated(&buf), linter.lint(&content));
    }
}

#[test]
fn registry_is_strictly_ascending() {
    let names: Vec<&str> = linter_names().collect();
    for pair in names.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
    }
    assert_eq!(names.len(), REGISTRY.len());
}

#[test]
fn catalog_is_complete() {
    for kind in LintErrorKind::ALL {
        assert!(!kind.description().is_empty(), "{kind:?}");
        assert_eq!(LintErrorKind::from_code(kind.code()), Some(*kind));
    }
}
