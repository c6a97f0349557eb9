//! CPF (Cadastro de Pessoas Físicas) value type and checksum validation.
//!
//! # Responsibility
//! - Strip free-form input down to digits and verify both modulo-11 check digits.
//! - Provide a `Cpf` value that is valid by construction.
//!
//! # Invariants
//! - Only inputs with exactly 11 digits are considered.
//! - Sequences of one repeated digit are rejected even though their checksum holds.
//! - Raw CPF values are never written to logs.

use crate::mask::{digits_only, mask_cpf};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of digits in a CPF, check digits included.
pub const CPF_DIGITS: usize = 11;

/// Reason a CPF input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpfValidationError {
    /// Input does not contain exactly 11 digits.
    InvalidLength { digits: usize },
    /// All 11 digits are the same (e.g. `000.000.000-00`).
    RepeatedDigits,
    /// Check digit at `position` (9 or 10) does not match the weighted sum.
    CheckDigitMismatch { position: usize },
}

impl CpfValidationError {
    /// Stable short code used in log events.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "invalid_length",
            Self::RepeatedDigits => "repeated_digits",
            Self::CheckDigitMismatch { .. } => "check_digit_mismatch",
        }
    }
}

impl Display for CpfValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { digits } => {
                write!(f, "CPF must have {CPF_DIGITS} digits, got {digits}")
            }
            Self::RepeatedDigits => write!(f, "CPF cannot be a single repeated digit"),
            Self::CheckDigitMismatch { position } => {
                write!(f, "CPF check digit at position {position} does not match")
            }
        }
    }
}

impl Error for CpfValidationError {}

/// A checksum-valid CPF, stored as its 11 raw digits.
///
/// Serialized in masked form (`NNN.NNN.NNN-NN`). Deserialization accepts any
/// string that `validate_cpf` accepts and fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    digits: String,
}

impl Cpf {
    /// Parses free-form input (punctuation allowed) into a validated CPF.
    ///
    /// # Errors
    /// - `InvalidLength` when the input does not carry exactly 11 digits.
    /// - `RepeatedDigits` for sequences like `111.111.111-11`.
    /// - `CheckDigitMismatch` when either check digit is wrong.
    pub fn parse(input: &str) -> Result<Self, CpfValidationError> {
        let result = Self::parse_digits(digits_only(input));
        if let Err(err) = &result {
            debug!(
                "event=cpf_validate module=model status=rejected reason={}",
                err.reason_code()
            );
        }
        result
    }

    fn parse_digits(digits: String) -> Result<Self, CpfValidationError> {
        if digits.len() != CPF_DIGITS {
            return Err(CpfValidationError::InvalidLength {
                digits: digits.len(),
            });
        }

        let values = digits
            .bytes()
            .map(|byte| u32::from(byte - b'0'))
            .collect::<Vec<_>>();
        if values.iter().all(|value| *value == values[0]) {
            return Err(CpfValidationError::RepeatedDigits);
        }

        for position in [CPF_DIGITS - 2, CPF_DIGITS - 1] {
            if check_digit(&values[..position]) != values[position] {
                return Err(CpfValidationError::CheckDigitMismatch { position });
            }
        }

        Ok(Self { digits })
    }

    /// Returns the 11 raw digits.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the display form `NNN.NNN.NNN-NN`.
    pub fn masked(&self) -> String {
        mask_cpf(&self.digits)
    }
}

impl Display for Cpf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked())
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.masked()
    }
}

/// Returns whether `input` holds a valid CPF once non-digits are stripped.
///
/// Total over all strings: malformed input yields `false`, never a panic.
pub fn validate_cpf(input: &str) -> bool {
    Cpf::parse(input).is_ok()
}

/// Computes the check digit following `prefix`.
///
/// Weights run from `prefix.len() + 1` down to 2. A remainder of 10 maps to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum = prefix
        .iter()
        .enumerate()
        .map(|(index, value)| value * (top_weight - index as u32))
        .sum::<u32>();
    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::{check_digit, validate_cpf, Cpf, CpfValidationError};

    #[test]
    fn check_digit_maps_remainder_ten_to_zero() {
        // 1,0,0,0,0,0,0,0,1 -> 10*1 + 2*1 = 12; 120 % 11 == 10
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), 0);
    }

    #[test]
    fn check_digit_uses_descending_weights() {
        assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), 3);
        assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7, 3]), 5);
    }

    #[test]
    fn parse_reports_first_failing_rule() {
        assert_eq!(
            Cpf::parse("123").unwrap_err(),
            CpfValidationError::InvalidLength { digits: 3 }
        );
        assert_eq!(
            Cpf::parse("000.000.000-00").unwrap_err(),
            CpfValidationError::RepeatedDigits
        );
        assert_eq!(
            Cpf::parse("111.444.777-45").unwrap_err(),
            CpfValidationError::CheckDigitMismatch { position: 9 }
        );
        assert_eq!(
            Cpf::parse("111.444.777-36").unwrap_err(),
            CpfValidationError::CheckDigitMismatch { position: 10 }
        );
    }

    #[test]
    fn validate_cpf_accepts_known_valid_number() {
        assert!(validate_cpf("111.444.777-35"));
        assert!(validate_cpf("11144477735"));
    }

    #[test]
    fn masked_and_display_agree() {
        let cpf = Cpf::parse("52998224725").expect("valid cpf");
        assert_eq!(cpf.digits(), "52998224725");
        assert_eq!(cpf.masked(), "529.982.247-25");
        assert_eq!(cpf.to_string(), "529.982.247-25");
    }
}
