//! FFI field-formatting API for UI hosts.
//!
//! # Responsibility
//! - Expose validators and masks as sync calls a UI binds to input events.
//! - Flatten core errors into strings and envelopes the host can display.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every function is a pure call except `init_logging`.

use synapse_core::{
    api_error_message as api_error_message_inner, core_version as core_version_inner,
    format_date as format_date_inner, format_time as format_time_inner,
    init_logging as init_logging_inner, mask_cpf as mask_cpf_inner,
    mask_phone as mask_phone_inner, ping as ping_inner, validate_cpf as validate_cpf_inner,
    validate_phone as validate_phone_inner, FieldMask,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Returns whether `input` is a valid CPF (punctuation allowed).
#[flutter_rust_bridge::frb(sync)]
pub fn validate_cpf(input: String) -> bool {
    validate_cpf_inner(&input)
}

/// Returns an empty string when the phone is acceptable, else the reason.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_phone(input: String) -> String {
    match validate_phone_inner(&input) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Masks CPF input on every keystroke.
#[flutter_rust_bridge::frb(sync)]
pub fn mask_cpf(raw: String) -> String {
    mask_cpf_inner(&raw)
}

/// Masks phone input on every keystroke.
#[flutter_rust_bridge::frb(sync)]
pub fn mask_phone(raw: String) -> String {
    mask_phone_inner(&raw)
}

/// Result of masking a host input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMaskResponse {
    /// Applied mask (`cpf|phone`), or `None` when the field is not masked.
    pub mask: Option<String>,
    /// Value to write back into the field.
    pub value: String,
    /// Maximum display length for the field, `None` when unmasked.
    pub max_len: Option<u32>,
}

/// Masks `raw` according to the field's `id`, `name` and `type` attributes.
///
/// # FFI contract
/// - Sync call, non-blocking; intended for every input-change event.
/// - Unmasked fields get their raw value back unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn mask_field(id: String, name: String, input_type: String, raw: String) -> FieldMaskResponse {
    match FieldMask::for_field(&id, &name, &input_type) {
        Some(mask) => FieldMaskResponse {
            mask: Some(mask.label().to_string()),
            value: mask.apply(&raw),
            max_len: Some(mask.max_len() as u32),
        },
        None => FieldMaskResponse {
            mask: None,
            value: raw,
            max_len: None,
        },
    }
}

/// Formats `YYYY-MM-DD` as `DD/MM/YYYY` (`-` when empty).
#[flutter_rust_bridge::frb(sync)]
pub fn format_date(iso: String) -> String {
    format_date_inner(&iso)
}

/// Formats `HH:MM:SS` as `HH:MM` (`-` when empty).
#[flutter_rust_bridge::frb(sync)]
pub fn format_time(time: String) -> String {
    format_time_inner(&time)
}

/// Extracts the notification message from an API error response body.
#[flutter_rust_bridge::frb(sync)]
pub fn api_error_message(body: String) -> String {
    let message = api_error_message_inner(&body);
    log::debug!(
        "event=api_error_message module=ffi status=ok body_len={}",
        body.len()
    );
    message
}
