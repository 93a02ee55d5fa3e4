//! Sensitive-field redaction.
//!
//! Replaces the values of known sensitive top-level fields with a fixed
//! marker before a record is serialized.

pub mod redactor;

pub use redactor::*;
