//! Calendar date components in `YYYYMMDD` and `YYMMDD` form.
//!
//! The `…D0` variants also accept day `00`, which GS1 uses to mean "end of
//! month" or "day unspecified". Two-digit years are widened with the century
//! window of [`LintConfig::century_for`].

use super::{digit_value, require_digits, require_len};
use crate::config::LintConfig;
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};

/// Returns `true` if `year` is a Gregorian leap year.
fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`; zero for any other month.
fn days_in_month(year: u64, month: u64) -> u64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Checks month and day of an all-digit `YYYYMMDD` value.
fn check_month_day(date: &[u8; 8], allow_zero_day: bool) -> LintResult {
    let year = digit_value(&date[..4]);
    let month = digit_value(&date[4..6]);
    let day = digit_value(&date[6..]);
    if !(1..=12).contains(&month) {
        return Err(LintError::new(LintErrorKind::IllegalMonth, 4, 2));
    }
    if day == 0 && allow_zero_day {
        return Ok(());
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(LintError::new(LintErrorKind::IllegalDay, 6, 2));
    }
    Ok(())
}

fn lint_yyyymmdd(data: &[u8], allow_zero_day: bool) -> LintResult {
    require_len(
        data,
        8,
        LintErrorKind::DateTooShort,
        LintErrorKind::DateTooLong,
    )?;
    require_digits(data)?;
    let mut date = [0u8; 8];
    date.copy_from_slice(data);
    check_month_day(&date, allow_zero_day)
}

/// Widens an all-digit `YYMMDD` value to `YYYYMMDD`.
pub(crate) fn widen(yymmdd: &[u8], config: &LintConfig) -> [u8; 8] {
    let yy = digit_value(&yymmdd[..2]);
    // Two digits, so always below 100.
    let century = config.century_for(yy as u8);
    let mut date = [b'0'; 8];
    date[0] = b'0' + century / 10;
    date[1] = b'0' + century % 10;
    date[2..].copy_from_slice(&yymmdd[..6]);
    date
}

/// Lints a `YYMMDD` value, returning its widened form on success.
pub(crate) fn lint_yymmdd(
    data: &[u8],
    config: &LintConfig,
    allow_zero_day: bool,
) -> Result<[u8; 8], LintError> {
    require_len(
        data,
        6,
        LintErrorKind::DateTooShort,
        LintErrorKind::DateTooLong,
    )?;
    require_digits(data)?;
    let date = widen(data, config);
    // Month and day errors start at offset 4 of the widened form.
    check_month_day(&date, allow_zero_day)
        .map_err(|err| LintError::new(err.kind, err.span.start - 2, err.span.len))?;
    Ok(date)
}

/// Date as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YyyyMmDd;

impl Linter for YyyyMmDd {
    fn name(&self) -> &'static str {
        "yyyymmdd"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        lint_yyyymmdd(data, false)
    }
}

/// Date as `YYYYMMDD`, day `00` permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct YyyyMmD0;

impl Linter for YyyyMmD0 {
    fn name(&self) -> &'static str {
        "yyyymmd0"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        lint_yyyymmdd(data, true)
    }
}

/// Date as `YYMMDD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YyMmDd;

impl Linter for YyMmDd {
    fn name(&self) -> &'static str {
        "yymmdd"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        lint_yymmdd(data, ctx.config, false).map(|_| ())
    }
}

/// Date as `YYMMDD`, day `00` permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct YyMmD0;

impl Linter for YyMmD0 {
    fn name(&self) -> &'static str {
        "yymmd0"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        lint_yymmdd(data, ctx.config, true).map(|_| ())
    }
}
