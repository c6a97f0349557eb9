//! Phone number acceptance rules.
//!
//! Area codes are not checked. The landline/mobile split follows Brazilian
//! numbering: up to 10 digits is a landline, 11 is a mobile number.

use crate::mask::digits_only;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted phone length, counted on the value as typed.
pub const MIN_PHONE_CHARS: usize = 8;
/// Largest digit count still formatted as a landline.
pub const LANDLINE_MAX_DIGITS: usize = 10;
/// Digit count of a full mobile number (area code included).
pub const PHONE_MAX_DIGITS: usize = 11;

/// Phone rejection reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneValidationError {
    TooShort { chars: usize, min: usize },
}

impl Display for PhoneValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { chars, min } => {
                write!(f, "phone must have at least {min} characters, got {chars}")
            }
        }
    }
}

impl Error for PhoneValidationError {}

/// Numbering pattern selected from the digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// `(NN) NNNN-NNNN`
    Landline,
    /// `(NN) NNNNN-NNNN`
    Mobile,
}

impl PhoneKind {
    /// Classifies by digit count; `None` when the input has no digits.
    pub fn classify(input: &str) -> Option<Self> {
        match digits_only(input).len() {
            0 => None,
            count => Some(Self::from_digit_count(count)),
        }
    }

    pub(crate) fn from_digit_count(count: usize) -> Self {
        if count <= LANDLINE_MAX_DIGITS {
            Self::Landline
        } else {
            Self::Mobile
        }
    }
}

/// Rejects phone values shorter than `MIN_PHONE_CHARS` characters.
pub fn validate_phone(input: &str) -> Result<(), PhoneValidationError> {
    let chars = input.chars().count();
    if chars < MIN_PHONE_CHARS {
        return Err(PhoneValidationError::TooShort {
            chars,
            min: MIN_PHONE_CHARS,
        });
    }
    Ok(())
}
