//! Log records and the field maps merged into them.

pub mod fields;
pub mod log_record;

pub use fields::*;
pub use log_record::*;
