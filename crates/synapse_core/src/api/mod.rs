//! Synapse HTTP API payload helpers.
//!
//! # Responsibility
//! - Decode the error envelope returned by the Synapse API.
//! - Produce one user-facing message for error notifications.
//!
//! # Invariants
//! - Message extraction never fails; unreadable bodies fall back to a default.

pub mod response;
