//! Error envelope decoding.
//!
//! The API answers failures with
//! `{"success": false, "error": {"code", "message", "field"}}`; older endpoints
//! send `{"error": "..."}` or only a top-level `message`.

use log::warn;
use serde::{Deserialize, Serialize};

/// Message shown when the body carries no usable error text.
pub const DEFAULT_ERROR_MESSAGE: &str = "Erro na requisição";

/// Decoded API error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `error` member: plain text or a structured detail object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorField {
    Text(String),
    Detail(ErrorDetail),
}

/// Structured error detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine code, e.g. `VALIDATION_ERROR` or `NOT_FOUND`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Offending input field for validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiErrorBody {
    /// Decodes a JSON response body.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// First non-empty of: `error` text, `error.message`, top-level `message`.
    pub fn message(&self) -> Option<&str> {
        let from_error = match &self.error {
            Some(ErrorField::Text(text)) => Some(text.as_str()),
            Some(ErrorField::Detail(detail)) => detail.message.as_deref(),
            None => None,
        };
        from_error
            .filter(|text| !text.trim().is_empty())
            .or_else(|| {
                self.message
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
            })
    }

    /// Error code from a structured detail.
    pub fn code(&self) -> Option<&str> {
        match &self.error {
            Some(ErrorField::Detail(detail)) => detail.code.as_deref(),
            _ => None,
        }
    }

    /// Field name from a structured detail.
    pub fn field(&self) -> Option<&str> {
        match &self.error {
            Some(ErrorField::Detail(detail)) => detail.field.as_deref(),
            _ => None,
        }
    }
}

/// Extracts the notification message from a raw error response body.
///
/// Falls back to [`DEFAULT_ERROR_MESSAGE`] when the body is not JSON or
/// carries no non-empty message.
pub fn api_error_message(body: &str) -> String {
    match ApiErrorBody::parse(body) {
        Ok(decoded) => decoded
            .message()
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string(),
        Err(err) => {
            warn!(
                "event=api_error_decode module=api status=error category={:?} line={} column={}",
                err.classify(),
                err.line(),
                err.column()
            );
            DEFAULT_ERROR_MESSAGE.to_string()
        }
    }
}
