//! Utils module - Shared utilities and helpers
//!
//! Helpers used by endpoint bindings that carry no endpoint-specific knowledge.

/// URL path-segment encoding
pub mod encoding;

/// Parameter and option validation
pub mod validation;
