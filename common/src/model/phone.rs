//! Brazilian phone number rules shared by the backend and the frontend.
//!
//! A phone is accepted when, after dropping every non-digit character, exactly
//! eleven digits remain and the first two (the DDD area code) fall within
//! `11..=99`. Validation and formatting both go through [`strip_non_digits`],
//! so they can never disagree about which inputs carry eleven digits.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Number of digits in a national number: two for the DDD plus nine for the subscriber.
pub const NATIONAL_NUMBER_LEN: usize = 11;

/// Country calling code prepended by [`format_phone`].
pub const COUNTRY_PREFIX: &str = "+55";

const MIN_AREA_CODE: u32 = 11;
const MAX_AREA_CODE: u32 = 99;

// ASCII digits only, so byte slicing the result is always on a char boundary.
static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9]").expect("non-digit pattern is a valid regex")
});

/// Why a phone number was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationReason {
    Ok,
    WrongLength,
    InvalidAreaCode,
}

impl ValidationReason {
    /// Text shown next to a rejected number.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationReason::Ok => "OK",
            ValidationReason::WrongLength => "Número deve ter 11 dígitos",
            ValidationReason::InvalidAreaCode => "DDD inválido",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of [`validate_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneValidation {
    pub is_valid: bool,
    pub reason: ValidationReason,
}

impl PhoneValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: ValidationReason::Ok,
        }
    }

    fn invalid(reason: ValidationReason) -> Self {
        Self {
            is_valid: false,
            reason,
        }
    }
}

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(raw: &str) -> String {
    NON_DIGIT_RE.replace_all(raw, "").into_owned()
}

/// Checks that `raw` holds an eleven digit number with a valid DDD.
///
/// Punctuation, spaces and letters are ignored. Empty input degenerates to zero
/// digits and fails on length.
pub fn validate_phone(raw: &str) -> PhoneValidation {
    let digits = strip_non_digits(raw);

    if digits.len() != NATIONAL_NUMBER_LEN {
        return PhoneValidation::invalid(ValidationReason::WrongLength);
    }

    match digits[..2].parse::<u32>() {
        Ok(ddd) if (MIN_AREA_CODE..=MAX_AREA_CODE).contains(&ddd) => PhoneValidation::valid(),
        _ => PhoneValidation::invalid(ValidationReason::InvalidAreaCode),
    }
}

/// Normalizes `raw` to `+55DDNNNNNNNNN`.
///
/// Three outcomes, all display text:
/// - no digits at all: empty string
/// - eleven or more digits: `+55` followed by the first eleven digits, extra trailing digits dropped
/// - one to ten digits: the bare digits, unchanged
pub fn format_phone(raw: &str) -> String {
    let digits = strip_non_digits(raw);

    if digits.is_empty() {
        return String::new();
    }

    if digits.len() >= NATIONAL_NUMBER_LEN {
        return format!(
            "{}{}{}",
            COUNTRY_PREFIX,
            &digits[..2],
            &digits[2..NATIONAL_NUMBER_LEN]
        );
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eleven_digits_with_valid_ddd() {
        let result = validate_phone("11989659006");
        assert!(result.is_valid);
        assert_eq!(result.reason, ValidationReason::Ok);
    }

    #[test]
    fn accepts_punctuated_numbers() {
        assert!(validate_phone("(85) 98965-9006").is_valid);
        assert!(validate_phone(" 85 9 8965 9006 ").is_valid);
        assert!(validate_phone("99.98965.9006").is_valid);
    }

    #[test]
    fn rejects_ten_digits() {
        let result = validate_phone("1989659006");
        assert!(!result.is_valid);
        assert_eq!(result.reason, ValidationReason::WrongLength);
    }

    #[test]
    fn rejects_twelve_digits() {
        let result = validate_phone("859896590061");
        assert_eq!(result.reason, ValidationReason::WrongLength);
    }

    #[test]
    fn rejects_area_code_below_eleven() {
        let result = validate_phone("05989659006");
        assert!(!result.is_valid);
        assert_eq!(result.reason, ValidationReason::InvalidAreaCode);

        assert_eq!(
            validate_phone("10989659006").reason,
            ValidationReason::InvalidAreaCode
        );
    }

    #[test]
    fn empty_and_non_numeric_input_fail_on_length() {
        assert_eq!(validate_phone("").reason, ValidationReason::WrongLength);
        assert_eq!(validate_phone("abc").reason, ValidationReason::WrongLength);
        assert_eq!(validate_phone("nan").reason, ValidationReason::WrongLength);
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not part of the numbering plan.
        assert_eq!(strip_non_digits("٨٥98965"), "98965");
    }

    #[test]
    fn formats_punctuated_number() {
        assert_eq!(format_phone("(85) 98965-9006"), "+5585989659006");
    }

    #[test]
    fn format_passes_short_numbers_through() {
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone("12-3"), "123");
    }

    #[test]
    fn format_returns_empty_without_digits() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("sem telefone"), "");
    }

    #[test]
    fn format_truncates_extra_trailing_digits() {
        assert_eq!(format_phone("859896590069999"), "+5585989659006");
    }

    #[test]
    fn validator_and_formatter_share_the_length_gate() {
        for raw in [
            "",
            "123",
            "1989659006",
            "11989659006",
            "(05) 98965-9006",
            "859896590061",
            "+55 (85) 98965-9006",
        ] {
            let digits = strip_non_digits(raw);
            let formatted = format_phone(raw);
            let international = formatted.starts_with(COUNTRY_PREFIX);
            assert_eq!(
                international,
                digits.len() >= NATIONAL_NUMBER_LEN,
                "formatter disagrees on {raw:?}"
            );
            if validate_phone(raw).reason != ValidationReason::WrongLength {
                assert!(international, "valid-length input {raw:?} not formatted");
            }
        }
    }

    #[test]
    fn digits_only_input_gives_the_same_results() {
        for raw in ["(85) 98965-9006", "05-98965-9006", "12 3", "x"] {
            let digits = strip_non_digits(raw);
            assert_eq!(validate_phone(raw), validate_phone(&digits));
            assert_eq!(format_phone(raw), format_phone(&digits));
        }
    }

    #[test]
    fn reason_serializes_with_wire_names() {
        let json = serde_json::to_string(&ValidationReason::InvalidAreaCode).unwrap();
        assert_eq!(json, "\"INVALID_AREA_CODE\"");
        let json = serde_json::to_string(&ValidationReason::WrongLength).unwrap();
        assert_eq!(json, "\"WRONG_LENGTH\"");
        let json = serde_json::to_string(&ValidationReason::Ok).unwrap();
        assert_eq!(json, "\"OK\"");
    }
}
