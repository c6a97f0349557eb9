//! Flutter-facing bindings over `synapse_core`.

pub mod api;
