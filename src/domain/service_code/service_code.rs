//! ServiceCode value object decoded from magnetic stripe track data.
//!
//! The service code is the three digit field that follows the expiration
//! date on track 1 and track 2. Each digit is interpreted on its own:
//!
//! | Position | Enum | Meaning |
//! |----------|------|---------|
//! | 1 | [`ServiceCode1`] | Interchange and technology |
//! | 2 | [`ServiceCode2`] | Authorization processing |
//! | 3 | [`ServiceCode3`] | Allowed services and PIN requirements |
//!
//! Track reads are often noisy, so decoding never fails. Anything that cannot
//! be interpreted decodes to the position's `Unknown` member, and callers who
//! want to reject such codes use [`ServiceCode::validate`].

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::service_code_type::ServiceCodeType;
use super::summary::{PositionSummary, ServiceCodeSummary};
use super::{ServiceCode1, ServiceCode2, ServiceCode3};
use crate::domain::foundation::{RawData, RawValue, ValidationError};

/// Field name used in validation errors.
const FIELD: &str = "service_code";

/// A decoded service code.
///
/// The normalized digits and the three decoded positions are fixed at
/// construction. Clearing the raw data leaves them untouched. Equality and
/// hashing consider only the normalized digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", from = "Option<String>")]
pub struct ServiceCode {
    raw: RawValue,
    service_code: String,
    service_code1: ServiceCode1,
    service_code2: ServiceCode2,
    service_code3: ServiceCode3,
}

impl ServiceCode {
    /// Longest raw value, after trimming, that is not flagged as too long.
    pub const MAX_LENGTH: usize = 3;

    /// Decodes a service code from raw track data.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::from_raw(Some(raw.into()))
    }

    /// Creates a service code with no input; every position is unknown.
    pub fn unknown() -> Self {
        Self::from_raw(None)
    }

    /// Decodes a service code from raw track data that may be absent.
    pub fn from_raw(raw: Option<String>) -> Self {
        let raw = RawValue::new(raw);
        let service_code = normalize(raw.trimmed());

        let decoded = Self {
            service_code1: decode_position(&service_code, 0),
            service_code2: decode_position(&service_code, 1),
            service_code3: decode_position(&service_code, 2),
            service_code,
            raw,
        };

        tracing::debug!(
            raw_present = decoded.raw.is_present(),
            raw_len = decoded.raw.trimmed_len(),
            digit_count = decoded.service_code.len(),
            has_service_code = decoded.has_service_code(),
            "Decoded service code"
        );

        decoded
    }

    /// Returns the normalized, digits-only service code.
    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    /// Returns position 1: interchange and technology.
    pub fn service_code1(&self) -> ServiceCode1 {
        self.service_code1
    }

    /// Returns position 2: authorization processing.
    pub fn service_code2(&self) -> ServiceCode2 {
        self.service_code2
    }

    /// Returns position 3: allowed services and PIN requirements.
    pub fn service_code3(&self) -> ServiceCode3 {
        self.service_code3
    }

    /// Returns true if all three positions decoded to a known member.
    pub fn has_service_code(&self) -> bool {
        !(self.service_code1.is_unknown()
            || self.service_code2.is_unknown()
            || self.service_code3.is_unknown())
    }

    /// Checks the code strictly.
    ///
    /// Fails if the raw data is too long or any position is unknown. The
    /// decoded values are never changed by this check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exceeds_maximum_length() {
            return Err(ValidationError::too_long(
                FIELD,
                Self::MAX_LENGTH,
                self.raw.trimmed_len(),
            ));
        }

        let unknown_position = [
            self.service_code1.is_unknown(),
            self.service_code2.is_unknown(),
            self.service_code3.is_unknown(),
        ]
        .iter()
        .position(|unknown| *unknown);

        match unknown_position {
            Some(index) => Err(ValidationError::invalid_format(
                FIELD,
                format!("position {} is not a known code", index + 1),
            )),
            None => Ok(()),
        }
    }

    /// Returns a serializable snapshot of the decoded code without raw data.
    pub fn summary(&self) -> ServiceCodeSummary {
        ServiceCodeSummary {
            service_code: self.service_code.clone(),
            has_service_code: self.has_service_code(),
            exceeds_maximum_length: self.exceeds_maximum_length(),
            positions: [
                PositionSummary::of(self.service_code1),
                PositionSummary::of(self.service_code2),
                PositionSummary::of(self.service_code3),
            ],
        }
    }
}

impl RawData for ServiceCode {
    fn raw_data(&self) -> Option<&str> {
        self.raw.expose()
    }

    fn exceeds_maximum_length(&self) -> bool {
        self.raw.trimmed_len() > Self::MAX_LENGTH
    }

    fn clear_raw_data(&mut self) {
        if self.raw.is_present() {
            tracing::trace!("Clearing raw service code data");
        }
        self.raw.clear();
    }
}

/// Strips every character that is not an ASCII digit.
fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Decodes the digit at `position`, or `S::UNKNOWN` if there is none.
fn decode_position<S: ServiceCodeType>(digits: &str, position: usize) -> S {
    digits
        .as_bytes()
        .get(position)
        .map_or(S::UNKNOWN, |byte| S::from_digit(byte - b'0'))
}

impl Default for ServiceCode {
    fn default() -> Self {
        Self::unknown()
    }
}

impl PartialEq for ServiceCode {
    fn eq(&self, other: &Self) -> bool {
        self.service_code == other.service_code
    }
}

impl Eq for ServiceCode {}

impl Hash for ServiceCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.service_code.hash(state);
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.service_code)
    }
}

impl FromStr for ServiceCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ServiceCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ServiceCode {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Option<String>> for ServiceCode {
    fn from(raw: Option<String>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<ServiceCode> for String {
    fn from(code: ServiceCode) -> Self {
        code.service_code
    }
}
