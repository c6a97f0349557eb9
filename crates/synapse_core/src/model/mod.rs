//! Validated domain values for Brazilian identity and contact fields.
//!
//! # Responsibility
//! - Define checksum-validated CPF values and phone rejection rules.
//! - Report *why* an input was rejected through typed error enums.
//!
//! # Invariants
//! - A constructed `Cpf` always holds 11 ASCII digits with valid check digits.
//! - Validation never panics on arbitrary input.

pub mod cpf;
pub mod phone;
