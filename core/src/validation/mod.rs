//! Trace validation

pub mod correctness;

pub use self::correctness::{validate_catalog, validate_trace, ValidationError};
