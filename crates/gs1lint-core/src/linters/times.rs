//! Time-of-day components: hours, minutes and seconds.

use super::{digit_value, require_digits, require_len};
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter};

/// A two-digit field with an inclusive upper bound.
fn two_digit_field(
    data: &[u8],
    max: u64,
    too_short: LintErrorKind,
    too_long: LintErrorKind,
    illegal: LintErrorKind,
) -> LintResult {
    require_len(data, 2, too_short, too_long)?;
    require_digits(data)?;
    if digit_value(data) > max {
        return Err(LintError::new(illegal, 0, 2));
    }
    Ok(())
}

/// Hour of the day, `00`-`23`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hh;

impl Linter for Hh {
    fn name(&self) -> &'static str {
        "hh"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        two_digit_field(
            data,
            23,
            LintErrorKind::HourTooShort,
            LintErrorKind::HourTooLong,
            LintErrorKind::IllegalHour,
        )
    }
}

/// Minute of the hour, `00`-`59`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mi;

impl Linter for Mi {
    fn name(&self) -> &'static str {
        "mi"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        two_digit_field(
            data,
            59,
            LintErrorKind::MinuteTooShort,
            LintErrorKind::MinuteTooLong,
            LintErrorKind::IllegalMinute,
        )
    }
}

/// Second of the minute, `00`-`59`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ss;

impl Linter for Ss {
    fn name(&self) -> &'static str {
        "ss"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        two_digit_field(
            data,
            59,
            LintErrorKind::SecondTooShort,
            LintErrorKind::SecondTooLong,
            LintErrorKind::IllegalSecond,
        )
    }
}

/// Hour and minute, `HHMI`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HhMi;

impl Linter for HhMi {
    fn name(&self) -> &'static str {
        "hhmi"
    }

    fn lint(&self, data: &[u8], _ctx: &LintContext<'_>) -> LintResult {
        require_len(
            data,
            4,
            LintErrorKind::HourWithMinuteTooShort,
            LintErrorKind::HourWithMinuteTooLong,
        )?;
        require_digits(data)?;
        if digit_value(&data[..2]) > 23 {
            return Err(LintError::new(LintErrorKind::IllegalHour, 0, 2));
        }
        if digit_value(&data[2..]) > 59 {
            return Err(LintError::new(LintErrorKind::IllegalMinute, 2, 2));
        }
        Ok(())
    }
}
