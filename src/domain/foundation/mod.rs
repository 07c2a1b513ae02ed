//! Foundation module - Shared domain primitives.
//!
//! Contains the raw data contract and the error types used by value objects
//! built from card-track input.

mod errors;
mod raw_data;

pub use errors::ValidationError;
pub use raw_data::{trim_track_data, RawData, RawValue};
