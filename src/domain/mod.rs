//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (raw data contract, errors)
//! - `service_code` - Service code value object and its position enums

pub mod foundation;
pub mod service_code;
