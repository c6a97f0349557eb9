//! Phone keystroke mask (`(NN) NNNN-NNNN` or `(NN) NNNNN-NNNN`).

use super::{digits_only, truncate_chars};
use crate::model::phone::{PhoneKind, PHONE_MAX_DIGITS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a fully formatted mobile number.
pub const PHONE_MASK_MAX_LEN: usize = 15;

static AREA_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})(\d)").expect("valid area code regex"));
static LANDLINE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})(\d)").expect("valid landline split regex"));
static MOBILE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{5})(\d)").expect("valid mobile split regex"));

/// Formats partial phone input for display.
///
/// The landline or mobile pattern is picked from the current digit count, so
/// the mask changes shape once an 11th digit is typed.
pub fn mask_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    let digits = truncate_chars(&digits, PHONE_MAX_DIGITS);

    let split_re = match PhoneKind::from_digit_count(digits.len()) {
        PhoneKind::Landline => &LANDLINE_SPLIT_RE,
        PhoneKind::Mobile => &MOBILE_SPLIT_RE,
    };
    let with_area_code = AREA_CODE_RE.replacen(digits, 1, "(${1}) ${2}");
    let masked = split_re.replacen(&with_area_code, 1, "${1}-${2}");

    truncate_chars(&masked, PHONE_MASK_MAX_LEN).to_string()
}

#[cfg(test)]
mod tests {
    use super::mask_phone;

    #[test]
    fn mask_phone_landline_while_typing() {
        let expected = [
            ("11", "11"),
            ("113", "(11) 3"),
            ("113333", "(11) 3333"),
            ("1133334", "(11) 3333-4"),
            ("1133334444", "(11) 3333-4444"),
        ];
        for (raw, masked) in expected {
            assert_eq!(mask_phone(raw), masked, "raw input: {raw}");
        }
    }

    #[test]
    fn mask_phone_switches_to_mobile_on_eleventh_digit() {
        assert_eq!(mask_phone("11988887777"), "(11) 98888-7777");
        assert_eq!(mask_phone("119888877771"), "(11) 98888-7777");
    }

    #[test]
    fn mask_phone_restrips_previous_mask() {
        assert_eq!(mask_phone("(11) 9888-8"), "(11) 9888-8");
        assert_eq!(mask_phone("(11) 3333-44447"), "(11) 33334-4447");
    }
}
