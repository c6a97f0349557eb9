//! Keystroke input masks and their field bindings.
//!
//! # Responsibility
//! - Re-derive a display value from the digits of the current raw input.
//! - Decide which mask a host input field should receive.
//!
//! # Invariants
//! - Masks depend only on the current input, never on earlier formatting.
//! - `mask(digits_only(mask(s))) == mask(s)` for every mask.
//! - Output never exceeds the mask's maximum display length.

pub mod cpf;
pub mod phone;

pub use cpf::{mask_cpf, CPF_MASK_MAX_LEN};
pub use phone::{mask_phone, PHONE_MASK_MAX_LEN};

use log::debug;
use serde::{Deserialize, Serialize};

/// Strips every character that is not an ASCII digit.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns at most the first `max_chars` characters of `value`.
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Mask bound to an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMask {
    Cpf,
    Phone,
}

impl FieldMask {
    /// Picks the mask for a field from its `id`, `name` and `type` attributes.
    ///
    /// Phone wins over CPF when both match: the host applies the CPF listener
    /// first and the phone listener last, so the phone mask decides the final
    /// value.
    pub fn for_field(id: &str, name: &str, input_type: &str) -> Option<Self> {
        let mask = if input_type == "tel" || id.contains("phone") || name.contains("phone") {
            Some(Self::Phone)
        } else if id.contains("cpf") || name.contains("cpf") {
            Some(Self::Cpf)
        } else {
            None
        };
        debug!(
            "event=field_mask_bind module=mask status=ok mask={}",
            mask.map(Self::label).unwrap_or("none")
        );
        mask
    }

    /// Applies this mask to the raw field value.
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Cpf => mask_cpf(raw),
            Self::Phone => mask_phone(raw),
        }
    }

    /// Maximum display length produced by this mask.
    pub fn max_len(self) -> usize {
        match self {
            Self::Cpf => CPF_MASK_MAX_LEN,
            Self::Phone => PHONE_MASK_MAX_LEN,
        }
    }

    /// Stable lowercase label (`cpf|phone`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Phone => "phone",
        }
    }
}
