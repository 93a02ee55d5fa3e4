//! Context logger facade.
//!
//! A [`Logger`] emits structured records to its sinks. Child loggers from
//! [`Logger::with_context`] add a fixed context to every record and share
//! the parent's sinks. The process-wide root is reached through [`logger()`].

mod macros;

pub mod context;
pub mod facade;
pub mod global;

pub use context::*;
pub use facade::*;
pub use global::*;
