//! North American coupon codes (AI 8110) and positive offer file coupon
//! codes (AI 8112).
//!
//! Both are sequences of digit fields, several of them prefixed by a
//! single-digit variable length indicator (VLI). A field that runs off the
//! end of the data is reported from its start to the end of the data; a field
//! that is missing entirely highlights the whole value.

use super::dates::lint_yymmdd;
use super::keys::check_gcp;
use super::require_digits;
use crate::kinds::LintErrorKind;
use crate::lint::{LintContext, LintError, LintResult, Linter, truncated};


const DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Reads fields from an all-digit coupon value.
struct Cursor<'d> {
    data: &'d [u8],
    pos: usize,
}

impl<'d> Cursor<'d> {
    fn new(data: &'d [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn missing(&self, kind: LintErrorKind) -> LintError {
        LintError::new(kind, 0, self.data.len())
    }

    /// Reads one digit, reporting `missing` at the end of the data.
    fn digit(&mut self, missing: LintErrorKind) -> Result<u8, LintError> {
        let &d = self.data.get(self.pos).ok_or_else(|| self.missing(missing))?;
        self.pos += 1;
        Ok(d - b'0')
    }

    /// Reads one digit that must be among `allowed`.
    fn code(
        &mut self,
        allowed: &[u8],
        missing: LintErrorKind,
        invalid: LintErrorKind,
    ) -> Result<u8, LintError> {
        let d = self.digit(missing)?;
        if !allowed.contains(&d) {
            return Err(LintError::new(invalid, self.pos - 1, 1));
        }
        Ok(d)
    }

    /// Reads a field of `len` digits, returning its start offset.
    fn take(&mut self, len: usize, kind: LintErrorKind) -> Result<usize, LintError> {
        let start = self.pos;
        if start + len > self.data.len() {
            return Err(truncated(kind, start, self.data.len()));
        }
        self.pos += len;
        Ok(start)
    }

    /// Reads a VLI in `0..=max` followed by a field of `6 + VLI` digits.
    fn prefixed(
        &mut self,
        max: u8,
        missing: LintErrorKind,
        invalid: LintErrorKind,
        truncated: LintErrorKind,
    ) -> Result<(usize, usize), LintError> {
        let vli = self.code(&DIGITS[..=usize::from(max)], missing, invalid)?;
        let len = 6 + usize::from(vli);
        let start = self.take(len, truncated)?;
        Ok((start, len))
    }

    /// Reads a serial number: a VLI of any digit followed by `6 + VLI`
    /// digits.
    fn serial_number(&mut self) -> Result<(), LintError> {
        let vli = self.digit(LintErrorKind::CouponMissingSerialNumberVli)?;
        self.take(
            6 + usize::from(vli),
            LintErrorKind::CouponTruncatedSerialNumber,
        )?;
        Ok(())
    }
}

/// Kinds for one qualifying purchase block.
struct PurchaseKinds {
    missing_vli: LintErrorKind,
    invalid_length: LintErrorKind,
    truncated_requirement: LintErrorKind,
    missing_code: LintErrorKind,
    invalid_code: LintErrorKind,
    truncated_family: LintErrorKind,
}

const FIRST_PURCHASE: PurchaseKinds = PurchaseKinds {
    missing_vli: LintErrorKind::CouponMissingFirstPurchaseRequirementVli,
    invalid_length: LintErrorKind::CouponInvalidFirstPurchaseRequirementLength,
    truncated_requirement: LintErrorKind::CouponTruncatedFirstPurchaseRequirement,
    missing_code: LintErrorKind::CouponMissingFirstPurchaseRequirementCode,
    invalid_code: LintErrorKind::CouponInvalidFirstPurchaseRequirementCode,
    truncated_family: LintErrorKind::CouponTruncatedFirstPurchaseFamilyCode,
};

const SECOND_PURCHASE: PurchaseKinds = PurchaseKinds {
    missing_vli: LintErrorKind::CouponMissingSecondPurchaseRequirementVli,
    invalid_length: LintErrorKind::CouponInvalidSecondPurchaseRequirementLength,
    truncated_requirement: LintErrorKind::CouponTruncatedSecondPurchaseRequirement,
    missing_code: LintErrorKind::CouponMissingSecondPurchaseRequirementCode,
    invalid_code: LintErrorKind::CouponInvalidSecondPurchaseRequirementCode,
    truncated_family: LintErrorKind::CouponTruncatedSecondPurchaseFamilyCode,
};

const THIRD_PURCHASE: PurchaseKinds = PurchaseKinds {
    missing_vli: LintErrorKind::CouponMissingThirdPurchaseRequirementVli,
    invalid_length: LintErrorKind::CouponInvalidThirdPurchaseRequirementLength,
    truncated_requirement: LintErrorKind::CouponTruncatedThirdPurchaseRequirement,
    missing_code: LintErrorKind::CouponMissingThirdPurchaseRequirementCode,
    invalid_code: LintErrorKind::CouponInvalidThirdPurchaseRequirementCode,
    truncated_family: LintErrorKind::CouponTruncatedThirdPurchaseFamilyCode,
};

/// Purchase requirement codes: units, cash, total transaction, detailed
/// offer, and "coupon value" variants.
const PURCHASE_CODES: &[u8] = &[0, 1, 2, 3, 4, 9];

/// Requirement VLI (1-5), requirement, requirement code, family code.
fn purchase(cursor: &mut Cursor<'_>, kinds: &PurchaseKinds) -> LintResult {
    let vli = cursor.code(&[1, 2, 3, 4, 5], kinds.missing_vli, kinds.invalid_length)?;
    cursor.take(usize::from(vli), kinds.truncated_requirement)?;
    cursor.code(PURCHASE_CODES, kinds.missing_code, kinds.invalid_code)?;
    cursor.take(3, kinds.truncated_family)?;
    Ok(())
}

/// A qualifying purchase GCP: VLI 0-6 followed by `6 + VLI` digits, or VLI
/// `9` meaning "same as the primary GCP".
fn purchase_gcp(
    cursor: &mut Cursor<'_>,
    ctx: &LintContext<'_>,
    missing: LintErrorKind,
    invalid: LintErrorKind,
    truncated: LintErrorKind,
) -> LintResult {
    let vli = cursor.code(&[0, 1, 2, 3, 4, 5, 6, 9], missing, invalid)?;
    if vli == 9 {
        return Ok(());
    }
    let len = 6 + usize::from(vli);
    let start = cursor.take(len, truncated)?;
    check_gcp(cursor.data, start, len, ctx)
}

/// Reads a `YYMMDD` date field, returning its start and widened form.
fn date_field(
    cursor: &mut Cursor<'_>,
    ctx: &LintContext<'_>,
    truncated: LintErrorKind,
    invalid: LintErrorKind,
) -> Result<(usize, [u8; 8]), LintError> {
    let start = cursor.take(6, truncated)?;
    let date = lint_yymmdd(&cursor.data[start..start + 6], ctx.config, false)
        .map_err(|_| LintError::new(invalid, start, 6))?;
    Ok((start, date))
}

/// North American coupon code (AI 8110).
#[derive(Debug, Clone, Copy, Default)]
pub struct CouponCode;

impl CouponCode {
    fn header(cursor: &mut Cursor<'_>, ctx: &LintContext<'_>) -> LintResult {
        let (start, len) = cursor.prefixed(
            6,
            LintErrorKind::CouponMissingGcpVli,
            LintErrorKind::CouponInvalidGcpLength,
            LintErrorKind::CouponTruncatedGcp,
        )?;
        check_gcp(cursor.data, start, len, ctx)?;
        cursor.take(6, LintErrorKind::CouponTruncatedOfferCode)?;
        let vli = cursor.code(
            &[1, 2, 3, 4, 5],
            LintErrorKind::CouponMissingSaveValueVli,
            LintErrorKind::CouponInvalidSaveValueLength,
        )?;
        cursor.take(usize::from(vli), LintErrorKind::CouponTruncatedSaveValue)?;
        purchase(cursor, &FIRST_PURCHASE)
    }

    fn optional_fields(cursor: &mut Cursor<'_>, ctx: &LintContext<'_>) -> LintResult {
        let mut last_field = 0;
        let mut expiration: Option<(usize, [u8; 8])> = None;
        while !cursor.is_at_end() {
            let field_pos = cursor.pos;
            let field = cursor.digit(LintErrorKind::CouponUnknownOptionalField)?;
            if !matches!(field, 1..=6 | 9) {
                return Err(LintError::new(
                    LintErrorKind::CouponUnknownOptionalField,
                    field_pos,
                    1,
                ));
            }
            if field <= last_field {
                return Err(LintError::new(
                    LintErrorKind::CouponOptionalFieldOutOfOrder,
                    field_pos,
                    1,
                ));
            }
            last_field = field;
            match field {
                1 => {
                    cursor.code(
                        &[0, 1, 2, 3],
                        LintErrorKind::CouponMissingAdditionalPurchaseRulesCode,
                        LintErrorKind::CouponInvalidAdditionalPurchaseRulesCode,
                    )?;
                    purchase(cursor, &SECOND_PURCHASE)?;
                    purchase_gcp(
                        cursor,
                        ctx,
                        LintErrorKind::CouponMissingSecondPurchaseGcpVli,
                        LintErrorKind::CouponInvalidSecondPurchaseGcpLength,
                        LintErrorKind::CouponTruncatedSecondPurchaseGcp,
                    )?;
                }
                2 => {
                    purchase(cursor, &THIRD_PURCHASE)?;
                    purchase_gcp(
                        cursor,
                        ctx,
                        LintErrorKind::CouponMissingThirdPurchaseGcpVli,
                        LintErrorKind::CouponInvalidThirdPurchaseGcpLength,
                        LintErrorKind::CouponTruncatedThirdPurchaseGcp,
                    )?;
                }
                3 => {
                    expiration = Some(date_field(
                        cursor,
                        ctx,
                        LintErrorKind::CouponTruncatedExpirationDate,
                        LintErrorKind::CouponInvalidExpirationDate,
                    )?);
                }
                4 => {
                    let (start, date) = date_field(
                        cursor,
                        ctx,
                        LintErrorKind::CouponTruncatedStartDate,
                        LintErrorKind::CouponInvalidStartDate,
                    )?;
                    if let Some((expiration_start, expiration_date)) = expiration {
                        if expiration_date < date {
                            return Err(LintError::new(
                                LintErrorKind::CouponExpirationBeforeStart,
                                expiration_start,
                                start + 6 - expiration_start,
                            ));
                        }
                    }
                }
                5 => {
                    cursor.serial_number()?;
                }
                6 => {
                    let vli = cursor.code(
                        &[1, 2, 3, 4, 5, 6, 7],
                        LintErrorKind::CouponMissingRetailerGcpOrGlnVli,
                        LintErrorKind::CouponInvalidRetailerGcpOrGlnLength,
                    )?;
                    let len = 6 + usize::from(vli);
                    let start = cursor.take(len, LintErrorKind::CouponTruncatedRetailerGcpOrGln)?;
                    check_gcp(cursor.data, start, len, ctx)?;
                }
                // 9
                _ => Self::miscellaneous(cursor)?,
            }
        }
        Ok(())
    }

    /// Field 9: save value code, applies-to item, store coupon flag and
    /// don't-multiply flag.
    fn miscellaneous(cursor: &mut Cursor<'_>) -> LintResult {
        cursor.code(
            &[0, 1, 2, 5, 6],
            LintErrorKind::CouponMissingSaveValueCode,
            LintErrorKind::CouponInvalidSaveValueCode,
        )?;
        cursor.code(
            &[0, 1, 2],
            LintErrorKind::CouponMissingSaveValueAppliesToItem,
            LintErrorKind::CouponInvalidSaveValueAppliesToItem,
        )?;
        cursor.digit(LintErrorKind::CouponMissingStoreCouponFlag)?;
        cursor.code(
            &[0, 1],
            LintErrorKind::CouponMissingDontMultiplyFlag,
            LintErrorKind::CouponInvalidDontMultiplyFlag,
        )?;
        Ok(())
    }
}

impl Linter for CouponCode {
    fn name(&self) -> &'static str {
        "couponcode"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        require_digits(data)?;
        let mut cursor = Cursor::new(data);
        Self::header(&mut cursor, ctx)?;
        Self::optional_fields(&mut cursor, ctx)
    }
}

/// Positive offer file coupon code (AI 8112).
#[derive(Debug, Clone, Copy, Default)]
pub struct CouponPosOffer;

impl Linter for CouponPosOffer {
    fn name(&self) -> &'static str {
        "couponposoffer"
    }

    fn lint(&self, data: &[u8], ctx: &LintContext<'_>) -> LintResult {
        require_digits(data)?;
        let mut cursor = Cursor::new(data);
        cursor.code(
            &[0, 1],
            LintErrorKind::CouponMissingFormatCode,
            LintErrorKind::CouponInvalidFormatCode,
        )?;
        let (start, len) = cursor.prefixed(
            6,
            LintErrorKind::CouponMissingFunderVli,
            LintErrorKind::CouponInvalidFunderLength,
            LintErrorKind::CouponTruncatedFunder,
        )?;
        check_gcp(data, start, len, ctx)?;
        cursor.take(6, LintErrorKind::CouponTruncatedOfferCode)?;
        cursor.serial_number()?;
        if !cursor.is_at_end() {
            return Err(LintError::new(
                LintErrorKind::CouponExcessData,
                cursor.pos,
                data.len() - cursor.pos,
            ));
        }
        Ok(())
    }
}
