//! Raw data contract for value objects built from card-track input.
//!
//! Every value object that keeps the caller's original string implements
//! [`RawData`]. The raw string is held in a [`RawValue`], which keeps it in a
//! [`SecretString`] so it is redacted from `Debug` output and zeroized when
//! cleared or dropped. Values derived from the raw string live in separate
//! fields of the owning type and are not affected by clearing.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Lifecycle contract for raw, potentially sensitive input.
pub trait RawData {
    /// Returns the raw value exactly as supplied, or `None` if it was never
    /// supplied or has been cleared.
    fn raw_data(&self) -> Option<&str>;

    /// Returns true if raw data is present and not blank.
    fn has_raw_data(&self) -> bool {
        self.raw_data()
            .map_or(false, |raw| !trim_track_data(raw).is_empty())
    }

    /// Returns true if the raw data is longer than this field allows.
    fn exceeds_maximum_length(&self) -> bool;

    /// Discards the raw data. Calling this more than once is a no-op.
    fn clear_raw_data(&mut self);
}

/// Strips leading and trailing spaces and control characters.
///
/// Stripe readers pad with NUL and other control bytes as well as spaces, so
/// every character up to and including U+0020 is removed.
pub fn trim_track_data(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// Storage slot for a raw input string.
///
/// The slot can only move from present to absent.
#[derive(Default)]
pub struct RawValue(Option<SecretString>);

impl RawValue {
    /// Creates a slot holding `raw`, or an empty slot for `None`.
    pub fn new(raw: Option<String>) -> Self {
        Self(raw.map(SecretString::new))
    }

    /// Exposes the raw string.
    pub fn expose(&self) -> Option<&str> {
        self.0.as_ref().map(|secret| secret.expose_secret().as_str())
    }

    /// Returns the raw string passed through [`trim_track_data`], or `""` if
    /// absent.
    pub fn trimmed(&self) -> &str {
        self.expose().map_or("", trim_track_data)
    }

    /// Number of characters in the trimmed raw string.
    pub fn trimmed_len(&self) -> usize {
        self.trimmed().chars().count()
    }

    /// Returns true if the slot still holds a value.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Zeroizes and drops the held value.
    pub fn clear(&mut self) {
        // SecretString zeroizes its buffer on drop.
        self.0 = None;
    }
}

impl Clone for RawValue {
    fn clone(&self) -> Self {
        Self::new(self.expose().map(str::to_owned))
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("RawValue([REDACTED])"),
            None => f.write_str("RawValue(None)"),
        }
    }
}
