//! Logger configuration.
//!
//! Everything the facade needs is read once at construction: minimum level,
//! environment (production / development / test), output format and the
//! process-wide service identity.

pub mod settings;

pub use settings::*;
