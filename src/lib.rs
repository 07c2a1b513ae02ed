//! Magstripe - Service code decoding for magnetic stripe card data
//!
//! This crate decodes the three digit service code found on track 1 and
//! track 2 of a payment card into its interchange, authorization and
//! PIN/service components. Value objects built from raw track data implement
//! the [`RawData`](domain::foundation::RawData) contract so the raw input can
//! be discarded once it has been interpreted.

pub mod config;
pub mod domain;
pub mod telemetry;
