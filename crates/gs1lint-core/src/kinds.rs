//! The catalog of reportable lint error kinds.
//!
//! Every distinct cause a linter can report is one [`LintErrorKind`] variant.
//! Each variant carries a stable snake_case [`code`][LintErrorKind::code] (also
//! its serialized form) and an English [`description`][LintErrorKind::description].
//! The three are declared side by side in a single table below, so a kind
//! cannot exist without its description.

use std::fmt;

use serde::{Serialize, Serializer};

macro_rules! lint_error_kinds {
    ($($variant:ident => $code:literal, $description:literal;)+) => {
        /// A reportable reason why a value failed a linter.
        ///
        /// Kinds are data, never control flow: they travel inside a
        /// [`LintError`][crate::LintError] together with the byte span to
        /// highlight.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum LintErrorKind {
            $(
                #[doc = $description]
                $variant,
            )+
        }

        impl LintErrorKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [LintErrorKind] = &[$(LintErrorKind::$variant,)+];

            /// Stable machine-readable identifier, e.g. `"incorrect_iban_checksum"`.
            pub const fn code(self) -> &'static str {
                match self {
                    $(LintErrorKind::$variant => $code,)+
                }
            }

            /// Human-readable English description of the failure.
            pub const fn description(self) -> &'static str {
                match self {
                    $(LintErrorKind::$variant => $description,)+
                }
            }
        }
    };
}

lint_error_kinds! {
    NonDigitCharacter => "non_digit_character", "A non-digit character was found where a digit is expected.";
    InvalidCset82Character => "invalid_cset82_character", "A non-CSET 82 character was found where a CSET 82 character is expected.";
    InvalidCset39Character => "invalid_cset39_character", "A non-CSET 39 character was found where a CSET 39 character is expected.";
    InvalidCset64Character => "invalid_cset64_character", "A non-CSET 64 character was found where a CSET 64 character is expected.";
    InvalidCset64Padding => "invalid_cset64_padding", "Incorrect number of CSET 64 pad characters.";
    InvalidPercentSequence => "invalid_percent_sequence", "Invalid or truncated percent-encoding sequence.";
    NotHyphen => "not_hyphen", "A non-hyphen character was found where a hyphen is expected.";
    RequiresNonDigitCharacter => "requires_non_digit_character", "A non-digit character is required.";
    ImporterIdxMustBeOneCharacter => "importer_idx_must_be_one_character", "The importer index must be a single character.";
    InvalidImporterIdxCharacter => "invalid_importer_idx_character", "Invalid importer index character.";
    IllegalZeroValue => "illegal_zero_value", "A zero value is not permitted.";
    IllegalZeroPrefix => "illegal_zero_prefix", "A leading zero is not permitted.";
    NotZero => "not_zero", "The value must be zero.";
    NotZeroOrOne => "not_zero_or_one", "The value must be 0 or 1.";
    InvalidWindingDirection => "invalid_winding_direction", "Invalid winding direction; must be 0, 1 or 9.";
    NotIso5218 => "not_iso5218", "Not a valid ISO/IEC 5218 biological sex code.";
    NotIso3166 => "not_iso3166", "Not a valid ISO 3166 three-digit country code.";
    NotIso3166Or999 => "not_iso3166_or_999", "Not a valid ISO 3166 three-digit country code or \"999\".";
    NotIso3166Alpha2 => "not_iso3166_alpha2", "Not a valid ISO 3166 two-character country code.";
    NotIso4217 => "not_iso4217", "Not a valid ISO 4217 three-digit currency code.";
    InvalidMediaType => "invalid_media_type", "Not a valid AIDC media type.";
    MediaTypeDatasourceOffline => "media_type_datasource_offline", "The AIDC media type data source is offline, so validity could not be determined.";
    InvalidPackageType => "invalid_package_type", "Not a valid package type.";
    InvalidLatitudeLength => "invalid_latitude_length", "The latitude must be exactly 10 digits.";
    InvalidLatitude => "invalid_latitude", "The latitude is outside the range 0 to 1800000000.";
    InvalidLongitudeLength => "invalid_longitude_length", "The longitude must be exactly 10 digits.";
    InvalidLongitude => "invalid_longitude", "The longitude is outside the range 0 to 3599999999.";
    InvalidLengthForPieceOfTotal => "invalid_length_for_piece_of_total", "The piece number and the total count must have the same number of digits.";
    ZeroPieceNumber => "zero_piece_number", "The piece number must not be zero.";
    ZeroTotalPieces => "zero_total_pieces", "The total count of pieces must not be zero.";
    PieceNumberExceedsTotal => "piece_number_exceeds_total", "The piece number exceeds the total count of pieces.";
    PositionInSequenceMalformed => "position_in_sequence_malformed", "The position in sequence must have the form N/M.";
    PositionExceedsEnd => "position_exceeds_end", "The position in sequence exceeds the end of the sequence.";
    DateTooShort => "date_too_short", "The date is too short.";
    DateTooLong => "date_too_long", "The date is too long.";
    IllegalMonth => "illegal_month", "The month is not valid.";
    IllegalDay => "illegal_day", "The day is not valid for the given month.";
    HourTooShort => "hour_too_short", "The hour is too short.";
    HourTooLong => "hour_too_long", "The hour is too long.";
    IllegalHour => "illegal_hour", "The hour is not valid.";
    MinuteTooShort => "minute_too_short", "The minute is too short.";
    MinuteTooLong => "minute_too_long", "The minute is too long.";
    IllegalMinute => "illegal_minute", "The minute is not valid.";
    SecondTooShort => "second_too_short", "The second is too short.";
    SecondTooLong => "second_too_long", "The second is too long.";
    IllegalSecond => "illegal_second", "The second is not valid.";
    HourWithMinuteTooShort => "hour_with_minute_too_short", "The hour with minute is too short.";
    HourWithMinuteTooLong => "hour_with_minute_too_long", "The hour with minute is too long.";
    TooShortForCheckDigit => "too_short_for_check_digit", "The data is too short to contain a check digit.";
    IncorrectCheckDigit => "incorrect_check_digit", "The check digit is incorrect.";
    TooShortForCheckPair => "too_short_for_check_pair", "The data is too short to contain a check character pair.";
    TooLongForCheckPairImplementation => "too_long_for_check_pair_implementation", "The data is too long for the check character pair implementation.";
    IncorrectCheckPair => "incorrect_check_pair", "The check character pair is incorrect.";
    IbanTooShort => "iban_too_short", "The IBAN is too short.";
    InvalidIbanCharacter => "invalid_iban_character", "The IBAN contains an invalid character.";
    IllegalIbanCountryCode => "illegal_iban_country_code", "The IBAN does not start with a valid ISO 3166 two-character country code.";
    IncorrectIbanChecksum => "incorrect_iban_checksum", "The IBAN checksum is incorrect.";
    TooShortForKey => "too_short_for_key", "The data is too short to contain a GS1 Company Prefix.";
    InvalidGcpPrefix => "invalid_gcp_prefix", "The GS1 Company Prefix is not valid.";
    GcpDatasourceOffline => "gcp_datasource_offline", "The GS1 Company Prefix data source is offline, so validity could not be determined.";
    CouponMissingGcpVli => "coupon_missing_gcp_vli", "The coupon's primary GS1 Company Prefix length indicator is missing.";
    CouponInvalidGcpLength => "coupon_invalid_gcp_length", "The coupon's primary GS1 Company Prefix length indicator is not valid.";
    CouponTruncatedGcp => "coupon_truncated_gcp", "The coupon's primary GS1 Company Prefix is truncated.";
    CouponTruncatedOfferCode => "coupon_truncated_offer_code", "The coupon's offer code is truncated.";
    CouponMissingSaveValueVli => "coupon_missing_save_value_vli", "The coupon's save value length indicator is missing.";
    CouponInvalidSaveValueLength => "coupon_invalid_save_value_length", "The coupon's save value length indicator is not valid.";
    CouponTruncatedSaveValue => "coupon_truncated_save_value", "The coupon's save value is truncated.";
    CouponMissingFirstPurchaseRequirementVli => "coupon_missing_first_purchase_requirement_vli", "The coupon's primary purchase requirement length indicator is missing.";
    CouponInvalidFirstPurchaseRequirementLength => "coupon_invalid_first_purchase_requirement_length", "The coupon's primary purchase requirement length indicator is not valid.";
    CouponTruncatedFirstPurchaseRequirement => "coupon_truncated_first_purchase_requirement", "The coupon's primary purchase requirement is truncated.";
    CouponMissingFirstPurchaseRequirementCode => "coupon_missing_first_purchase_requirement_code", "The coupon's primary purchase requirement code is missing.";
    CouponInvalidFirstPurchaseRequirementCode => "coupon_invalid_first_purchase_requirement_code", "The coupon's primary purchase requirement code is not valid.";
    CouponTruncatedFirstPurchaseFamilyCode => "coupon_truncated_first_purchase_family_code", "The coupon's primary purchase family code is truncated.";
    CouponMissingAdditionalPurchaseRulesCode => "coupon_missing_additional_purchase_rules_code", "The coupon's additional purchase rules code is missing.";
    CouponInvalidAdditionalPurchaseRulesCode => "coupon_invalid_additional_purchase_rules_code", "The coupon's additional purchase rules code is not valid.";
    CouponMissingSecondPurchaseRequirementVli => "coupon_missing_second_purchase_requirement_vli", "The coupon's second purchase requirement length indicator is missing.";
    CouponInvalidSecondPurchaseRequirementLength => "coupon_invalid_second_purchase_requirement_length", "The coupon's second purchase requirement length indicator is not valid.";
    CouponTruncatedSecondPurchaseRequirement => "coupon_truncated_second_purchase_requirement", "The coupon's second purchase requirement is truncated.";
    CouponMissingSecondPurchaseRequirementCode => "coupon_missing_second_purchase_requirement_code", "The coupon's second purchase requirement code is missing.";
    CouponInvalidSecondPurchaseRequirementCode => "coupon_invalid_second_purchase_requirement_code", "The coupon's second purchase requirement code is not valid.";
    CouponTruncatedSecondPurchaseFamilyCode => "coupon_truncated_second_purchase_family_code", "The coupon's second purchase family code is truncated.";
    CouponMissingSecondPurchaseGcpVli => "coupon_missing_second_purchase_gcp_vli", "The coupon's second purchase GS1 Company Prefix length indicator is missing.";
    CouponInvalidSecondPurchaseGcpLength => "coupon_invalid_second_purchase_gcp_length", "The coupon's second purchase GS1 Company Prefix length indicator is not valid.";
    CouponTruncatedSecondPurchaseGcp => "coupon_truncated_second_purchase_gcp", "The coupon's second purchase GS1 Company Prefix is truncated.";
    CouponMissingThirdPurchaseRequirementVli => "coupon_missing_third_purchase_requirement_vli", "The coupon's third purchase requirement length indicator is missing.";
    CouponInvalidThirdPurchaseRequirementLength => "coupon_invalid_third_purchase_requirement_length", "The coupon's third purchase requirement length indicator is not valid.";
    CouponTruncatedThirdPurchaseRequirement => "coupon_truncated_third_purchase_requirement", "The coupon's third purchase requirement is truncated.";
    CouponMissingThirdPurchaseRequirementCode => "coupon_missing_third_purchase_requirement_code", "The coupon's third purchase requirement code is missing.";
    CouponInvalidThirdPurchaseRequirementCode => "coupon_invalid_third_purchase_requirement_code", "The coupon's third purchase requirement code is not valid.";
    CouponTruncatedThirdPurchaseFamilyCode => "coupon_truncated_third_purchase_family_code", "The coupon's third purchase family code is truncated.";
    CouponMissingThirdPurchaseGcpVli => "coupon_missing_third_purchase_gcp_vli", "The coupon's third purchase GS1 Company Prefix length indicator is missing.";
    CouponInvalidThirdPurchaseGcpLength => "coupon_invalid_third_purchase_gcp_length", "The coupon's third purchase GS1 Company Prefix length indicator is not valid.";
    CouponTruncatedThirdPurchaseGcp => "coupon_truncated_third_purchase_gcp", "The coupon's third purchase GS1 Company Prefix is truncated.";
    CouponTruncatedExpirationDate => "coupon_truncated_expiration_date", "The coupon's expiration date is truncated.";
    CouponInvalidExpirationDate => "coupon_invalid_expiration_date", "The coupon's expiration date is not valid.";
    CouponTruncatedStartDate => "coupon_truncated_start_date", "The coupon's start date is truncated.";
    CouponInvalidStartDate => "coupon_invalid_start_date", "The coupon's start date is not valid.";
    CouponExpirationBeforeStart => "coupon_expiration_before_start", "The coupon's expiration date precedes its start date.";
    CouponMissingSerialNumberVli => "coupon_missing_serial_number_vli", "The coupon's serial number length indicator is missing.";
    CouponTruncatedSerialNumber => "coupon_truncated_serial_number", "The coupon's serial number is truncated.";
    CouponMissingRetailerGcpOrGlnVli => "coupon_missing_retailer_gcp_or_gln_vli", "The coupon's retailer GS1 Company Prefix or GLN length indicator is missing.";
    CouponInvalidRetailerGcpOrGlnLength => "coupon_invalid_retailer_gcp_or_gln_length", "The coupon's retailer GS1 Company Prefix or GLN length indicator is not valid.";
    CouponTruncatedRetailerGcpOrGln => "coupon_truncated_retailer_gcp_or_gln", "The coupon's retailer GS1 Company Prefix or GLN is truncated.";
    CouponMissingSaveValueCode => "coupon_missing_save_value_code", "The coupon's save value code is missing.";
    CouponInvalidSaveValueCode => "coupon_invalid_save_value_code", "The coupon's save value code is not valid.";
    CouponMissingSaveValueAppliesToItem => "coupon_missing_save_value_applies_to_item", "The coupon's save value applies-to-item indicator is missing.";
    CouponInvalidSaveValueAppliesToItem => "coupon_invalid_save_value_applies_to_item", "The coupon's save value applies-to-item indicator is not valid.";
    CouponMissingStoreCouponFlag => "coupon_missing_store_coupon_flag", "The coupon's store coupon flag is missing.";
    CouponMissingDontMultiplyFlag => "coupon_missing_dont_multiply_flag", "The coupon's don't multiply flag is missing.";
    CouponInvalidDontMultiplyFlag => "coupon_invalid_dont_multiply_flag", "The coupon's don't multiply flag is not valid.";
    CouponUnknownOptionalField => "coupon_unknown_optional_field", "The coupon contains an unknown optional field.";
    CouponOptionalFieldOutOfOrder => "coupon_optional_field_out_of_order", "The coupon's optional fields are repeated or out of order.";
    CouponMissingFormatCode => "coupon_missing_format_code", "The coupon's format code is missing.";
    CouponInvalidFormatCode => "coupon_invalid_format_code", "The coupon's format code is not valid.";
    CouponMissingFunderVli => "coupon_missing_funder_vli", "The coupon's funder ID length indicator is missing.";
    CouponInvalidFunderLength => "coupon_invalid_funder_length", "The coupon's funder ID length indicator is not valid.";
    CouponTruncatedFunder => "coupon_truncated_funder", "The coupon's funder ID is truncated.";
    CouponExcessData => "coupon_excess_data", "The coupon contains excess data after its last field.";
}

impl LintErrorKind {
    /// Looks a kind up by its [`code`][LintErrorKind::code].
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for LintErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for LintErrorKind {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.code())
    }
}
