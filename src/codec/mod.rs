//! Wire Codec
//!
//! The engine's protocol-buffer schema and the enum tables that translate its
//! numeric fields into names.

pub mod enums;
pub mod wire;

pub use enums::{EnumTable, CODE, NOT_FOUND, SEVERITY, STATUS};
pub use wire::{WireValidationError, WireValidationResult};
