//! Tunable thresholds consulted by individual linters.

use serde::{Deserialize, Serialize};

/// Default two-digit reference year for the YY century window.
pub const DEFAULT_REFERENCE_YEAR: u8 = 21;

/// Default minimum IBAN length; values of this length or shorter are
/// rejected as too short.
///
/// There is no normative minimum. Ten characters leaves room for the
/// country code, check digits and a plausible account identifier.
pub const DEFAULT_IBAN_MIN_LENGTH: usize = 10;

/// Configuration shared by every linter invoked through a
/// [`Dictionary`](crate::Dictionary).
///
/// Missing fields deserialize to their defaults, so a partial TOML or JSON
/// document is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Two-digit "current year" (`00`-`99`) used to widen `YY` dates.
    ///
    /// A year more than 50 ahead of it belongs to the previous century; a
    /// year 50 or more behind it to the next.
    pub reference_year: u8,
    /// IBANs no longer than this are too short.
    pub iban_min_length: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            iban_min_length: DEFAULT_IBAN_MIN_LENGTH,
        }
    }
}

impl LintConfig {
    /// Returns the century (as a two-digit prefix, e.g. `20`) that the
    /// two-digit year `yy` falls in relative to the reference year.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1lint_core::LintConfig;
    ///
    /// let config = LintConfig::default();
    /// assert_eq!(config.century_for(71), 20);
    /// assert_eq!(config.century_for(72), 19);
    /// assert_eq!(config.century_for(0), 20);
    /// ```
    pub fn century_for(&self, yy: u8) -> u8 {
        let delta = i16::from(yy) - i16::from(self.reference_year % 100);
        if delta >= 51 {
            19
        } else if delta > -50 {
            20
        } else {
            21
        }
    }
}
