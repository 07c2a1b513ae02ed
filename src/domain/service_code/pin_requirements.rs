//! Service code position 3: allowed services and PIN requirements.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::service_code_type::{DigitTable, ServiceCodeType};

static DIGITS: Lazy<DigitTable<ServiceCode3>> = Lazy::new(DigitTable::build);

/// Which services the card may be used for and when a PIN is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCode3 {
    NoRestrictionsPinRequired,
    NoRestrictions,
    GoodsAndServicesOnly,
    AtmOnlyPinRequired,
    CashOnly,
    GoodsAndServicesOnlyPinRequired,
    NoRestrictionsPinWhereFeasible,
    GoodsAndServicesOnlyPinWhereFeasible,
    Unknown,
}

impl ServiceCodeType for ServiceCode3 {
    const UNKNOWN: Self = ServiceCode3::Unknown;

    fn all() -> &'static [Self] {
        &[
            ServiceCode3::NoRestrictionsPinRequired,
            ServiceCode3::NoRestrictions,
            ServiceCode3::GoodsAndServicesOnly,
            ServiceCode3::AtmOnlyPinRequired,
            ServiceCode3::CashOnly,
            ServiceCode3::GoodsAndServicesOnlyPinRequired,
            ServiceCode3::NoRestrictionsPinWhereFeasible,
            ServiceCode3::GoodsAndServicesOnlyPinWhereFeasible,
            ServiceCode3::Unknown,
        ]
    }

    fn value(&self) -> Option<u8> {
        match self {
            ServiceCode3::NoRestrictionsPinRequired => Some(0),
            ServiceCode3::NoRestrictions => Some(1),
            ServiceCode3::GoodsAndServicesOnly => Some(2),
            ServiceCode3::AtmOnlyPinRequired => Some(3),
            ServiceCode3::CashOnly => Some(4),
            ServiceCode3::GoodsAndServicesOnlyPinRequired => Some(5),
            ServiceCode3::NoRestrictionsPinWhereFeasible => Some(6),
            ServiceCode3::GoodsAndServicesOnlyPinWhereFeasible => Some(7),
            ServiceCode3::Unknown => None,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ServiceCode3::NoRestrictionsPinRequired => "No restrictions, PIN required",
            ServiceCode3::NoRestrictions => "No restrictions",
            ServiceCode3::GoodsAndServicesOnly => "Goods and services only (no cash)",
            ServiceCode3::AtmOnlyPinRequired => "ATM only, PIN required",
            ServiceCode3::CashOnly => "Cash only",
            ServiceCode3::GoodsAndServicesOnlyPinRequired => {
                "Goods and services only (no cash), PIN required"
            }
            ServiceCode3::NoRestrictionsPinWhereFeasible => {
                "No restrictions, use PIN where feasible"
            }
            ServiceCode3::GoodsAndServicesOnlyPinWhereFeasible => {
                "Goods and services only (no cash), use PIN where feasible"
            }
            ServiceCode3::Unknown => "Unknown",
        }
    }

    fn digit_table() -> &'static DigitTable<Self> {
        &DIGITS
    }
}

impl fmt::Display for ServiceCode3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_digit_decodes_zero_through_seven() {
        let decoded: Vec<ServiceCode3> = (0u8..8).map(ServiceCode3::from_digit).collect();
        assert_eq!(decoded, ServiceCode3::all()[..8].to_vec());
    }

    #[test]
    fn from_digit_falls_back_for_eight_and_nine() {
        assert_eq!(ServiceCode3::from_digit(8), ServiceCode3::Unknown);
        assert_eq!(ServiceCode3::from_digit(9), ServiceCode3::Unknown);
    }

    #[test]
    fn displays_description() {
        assert_eq!(ServiceCode3::CashOnly.to_string(), "Cash only");
    }
}
