//! Core field logic for Synapse.
//! Validators and keystroke masks for CPF and phone fields, display helpers,
//! and API error decoding. Every function here is pure except logging setup.

pub mod api;
pub mod display;
pub mod logging;
pub mod mask;
pub mod model;

pub use api::response::{api_error_message, ApiErrorBody, ErrorDetail, ErrorField};
pub use display::{format_date, format_time};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use mask::{digits_only, mask_cpf, mask_phone, FieldMask};
pub use model::cpf::{validate_cpf, Cpf, CpfValidationError};
pub use model::phone::{validate_phone, PhoneKind, PhoneValidationError};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
