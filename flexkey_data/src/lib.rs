//! Shared data model for flexkey: naming conventions and resolver configuration.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_resolver};
