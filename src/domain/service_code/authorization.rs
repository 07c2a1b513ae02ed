//! Service code position 2: authorization processing.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::service_code_type::{DigitTable, ServiceCodeType};

static DIGITS: Lazy<DigitTable<ServiceCode2>> = Lazy::new(DigitTable::build);

/// How transactions on the card must be authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCode2 {
    Normal,
    ByIssuer,
    ByIssuerUnlessBilateral,
    Unknown,
}

impl ServiceCodeType for ServiceCode2 {
    const UNKNOWN: Self = ServiceCode2::Unknown;

    fn all() -> &'static [Self] {
        &[
            ServiceCode2::Normal,
            ServiceCode2::ByIssuer,
            ServiceCode2::ByIssuerUnlessBilateral,
            ServiceCode2::Unknown,
        ]
    }

    fn value(&self) -> Option<u8> {
        match self {
            ServiceCode2::Normal => Some(0),
            ServiceCode2::ByIssuer => Some(2),
            ServiceCode2::ByIssuerUnlessBilateral => Some(4),
            ServiceCode2::Unknown => None,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ServiceCode2::Normal => "Normal",
            ServiceCode2::ByIssuer => "Contact issuer via online means",
            ServiceCode2::ByIssuerUnlessBilateral => {
                "Contact issuer via online means except under bilateral agreement"
            }
            ServiceCode2::Unknown => "Unknown",
        }
    }

    fn digit_table() -> &'static DigitTable<Self> {
        &DIGITS
    }
}

impl fmt::Display for ServiceCode2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
