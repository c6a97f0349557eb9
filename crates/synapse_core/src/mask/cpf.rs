//! CPF keystroke mask (`NNN.NNN.NNN-NN`).

use super::{digits_only, truncate_chars};
use crate::model::cpf::CPF_DIGITS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a fully formatted CPF.
pub const CPF_MASK_MAX_LEN: usize = 14;

static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3})(\d)").expect("valid cpf group regex"));
static CHECK_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3})(\d{1,2})$").expect("valid cpf check digits regex"));

/// Formats partial CPF input for display.
///
/// Each substitution fires at most once, in order: two `.` groupings, then the
/// `-` before the trailing one or two check digits. Digits past the 11th are
/// ignored.
pub fn mask_cpf(raw: &str) -> String {
    let digits = digits_only(raw);
    let digits = truncate_chars(&digits, CPF_DIGITS);

    let first = GROUP_RE.replacen(digits, 1, "${1}.${2}");
    let second = GROUP_RE.replacen(&first, 1, "${1}.${2}");
    let masked = CHECK_DIGITS_RE.replacen(&second, 1, "${1}-${2}");

    truncate_chars(&masked, CPF_MASK_MAX_LEN).to_string()
}

#[cfg(test)]
mod tests {
    use super::mask_cpf;

    #[test]
    fn mask_cpf_builds_up_while_typing() {
        let expected = [
            ("1", "1"),
            ("1114", "111.4"),
            ("111444", "111.444"),
            ("1114447", "111.444.7"),
            ("111444777", "111.444.777"),
            ("1114447773", "111.444.777-3"),
            ("11144477735", "111.444.777-35"),
        ];
        for (raw, masked) in expected {
            assert_eq!(mask_cpf(raw), masked, "raw input: {raw}");
        }
    }

    #[test]
    fn mask_cpf_ignores_extra_digits() {
        assert_eq!(mask_cpf("111444777351"), "111.444.777-35");
    }
}
