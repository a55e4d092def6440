//! Membership in reference code lists.
//!
//! A value failing one of these checks is highlighted in full.

use crate::external::{LookupOutcome, observe};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};
use crate::lookup::{bitfield_contains, sorted_contains};
use crate::tables::{
    ISO3166_999_BITS, ISO3166_ALPHA2, ISO3166_BITS, ISO4217_BITS, PACKAGE_TYPES,
};

/// Checks a three-digit numeric code against a bitfield of code values.
fn three_digit_code(data: &[u8], bits: &[u64], kind: LintErrorKind) -> LintResult {
    let listed = match data {
        [_, _, _] if data.iter().all(u8::is_ascii_digit) => {
            let code = data
                .iter()
                .fold(0, |acc, &d| acc * 10 + usize::from(d - b'0'));
            bitfield_contains(bits, code)
        }
        _ => false,
    };
    if listed {
        Ok(())
    } else {
        Err(LintError::new(kind, 0, data.len()))
    }
}

/// ISO 3166-1 numeric country code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166;

impl Linter for Iso3166 {
    fn name(&self) -> &'static str {
        "iso3166"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        three_digit_code(data, &ISO3166_BITS, LintErrorKind::NotIso3166)
    }
}

/// ISO 3166-1 numeric country code, or `999` for "unknown".
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166With999;

impl Linter for Iso3166With999 {
    fn name(&self) -> &'static str {
        "iso3166999"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        three_digit_code(data, &ISO3166_999_BITS, LintErrorKind::NotIso3166Or999)
    }
}

/// ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166Alpha2;

impl Linter for Iso3166Alpha2 {
    fn name(&self) -> &'static str {
        "iso3166alpha2"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if !sorted_contains(ISO3166_ALPHA2, data) {
            return Err(LintError::new(
                LintErrorKind::NotIso3166Alpha2,
                0,
                data.len(),
            ));
        }
        Ok(())
    }
}

/// ISO 4217 numeric currency code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso4217;

impl Linter for Iso4217 {
    fn name(&self) -> &'static str {
        "iso4217"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        three_digit_code(data, &ISO4217_BITS, LintErrorKind::NotIso4217)
    }
}

/// ISO/IEC 5218 sex code: `0` unknown, `1` male, `2` female, `9` not
/// applicable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso5218;

impl Linter for Iso5218 {
    fn name(&self) -> &'static str {
        "iso5218"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        match data {
            [b'0' | b'1' | b'2' | b'9'] => Ok(()),
            _ => Err(LintError::new(LintErrorKind::NotIso5218, 0, data.len())),
        }
    }
}

/// GS1 package type code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageType;

impl Linter for PackageType {
    fn name(&self) -> &'static str {
        "packagetype"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        if !sorted_contains(PACKAGE_TYPES, data) {
            return Err(LintError::new(
                LintErrorKind::InvalidPackageType,
                0,
                data.len(),
            ));
        }
        Ok(())
    }
}

/// AIDC media type, checked through the context's lookup source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaType;

impl Linter for MediaType {
    fn name(&self) -> &'static str {
        "mediatype"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        let kind = match observe(ctx.lookup, "media type", ctx.lookup.media_type(data)) {
            LookupOutcome::Valid => return Ok(()),
            LookupOutcome::Invalid => LintErrorKind::InvalidMediaType,
            LookupOutcome::Offline => LintErrorKind::MediaTypeDatasourceOffline,
        };
        Err(LintError::new(kind, 0, data.len()))
    }
}
