//! Serializable view of a decoded service code.

use serde::Serialize;

use super::service_code_type::ServiceCodeType;

/// Snapshot of a decoded service code. Never carries raw data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCodeSummary {
    pub service_code: String,
    pub has_service_code: bool,
    pub exceeds_maximum_length: bool,
    pub positions: [PositionSummary; 3],
}

/// One decoded position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionSummary {
    /// `None` when the position is unknown.
    pub value: Option<u8>,
    pub description: &'static str,
}

impl PositionSummary {
    pub(crate) fn of<S: ServiceCodeType>(member: S) -> Self {
        Self {
            value: member.value(),
            description: member.description(),
        }
    }
}
