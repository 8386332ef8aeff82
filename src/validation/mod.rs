//! Validation Results
//!
//! Plain result records and the marshalling that builds them from engine
//! output.

pub mod marshal;
pub mod result;

pub use marshal::{to_wire_record, validate, DEFAULT_FORMAT};
pub use result::{ValidationError, ValidationResult};
