//! Service code position 1: interchange and technology.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::service_code_type::{DigitTable, ServiceCodeType};

static DIGITS: Lazy<DigitTable<ServiceCode1>> = Lazy::new(DigitTable::build);

/// Where the card may be used, and whether the chip should be preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCode1 {
    International,
    InternationalIc,
    National,
    NationalIc,
    Private,
    Test,
    Unknown,
}

impl ServiceCodeType for ServiceCode1 {
    const UNKNOWN: Self = ServiceCode1::Unknown;

    fn all() -> &'static [Self] {
        &[
            ServiceCode1::International,
            ServiceCode1::InternationalIc,
            ServiceCode1::National,
            ServiceCode1::NationalIc,
            ServiceCode1::Private,
            ServiceCode1::Test,
            ServiceCode1::Unknown,
        ]
    }

    fn value(&self) -> Option<u8> {
        match self {
            ServiceCode1::International => Some(1),
            ServiceCode1::InternationalIc => Some(2),
            ServiceCode1::National => Some(5),
            ServiceCode1::NationalIc => Some(6),
            ServiceCode1::Private => Some(7),
            ServiceCode1::Test => Some(9),
            ServiceCode1::Unknown => None,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ServiceCode1::International => "International interchange OK",
            ServiceCode1::InternationalIc => {
                "International interchange, use IC (chip) where feasible"
            }
            ServiceCode1::National => "National interchange only except under bilateral agreement",
            ServiceCode1::NationalIc => {
                "National interchange only except under bilateral agreement, use IC (chip) where feasible"
            }
            ServiceCode1::Private => "No interchange except under bilateral agreement (closed loop)",
            ServiceCode1::Test => "Test",
            ServiceCode1::Unknown => "Unknown",
        }
    }

    fn digit_table() -> &'static DigitTable<Self> {
        &DIGITS
    }
}

impl fmt::Display for ServiceCode1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_digit_decodes_defined_values() {
        assert_eq!(ServiceCode1::from_digit(1), ServiceCode1::International);
        assert_eq!(ServiceCode1::from_digit(2), ServiceCode1::InternationalIc);
        assert_eq!(ServiceCode1::from_digit(5), ServiceCode1::National);
        assert_eq!(ServiceCode1::from_digit(6), ServiceCode1::NationalIc);
        assert_eq!(ServiceCode1::from_digit(7), ServiceCode1::Private);
        assert_eq!(ServiceCode1::from_digit(9), ServiceCode1::Test);
    }

    #[test]
    fn from_digit_falls_back_for_undefined_values() {
        for digit in [0, 3, 4, 8] {
            assert_eq!(ServiceCode1::from_digit(digit), ServiceCode1::Unknown);
        }
    }

    #[test]
    fn every_valued_member_round_trips_through_its_digit() {
        for member in ServiceCode1::all() {
            if let Some(value) = member.value() {
                assert_eq!(ServiceCode1::from_digit(value), *member);
            }
        }
    }

    #[test]
    fn only_unknown_has_no_value() {
        let valueless: Vec<_> = ServiceCode1::all()
            .iter()
            .filter(|m| m.value().is_none())
            .collect();
        assert_eq!(valueless, vec![&ServiceCode1::Unknown]);
    }

    #[test]
    fn displays_description() {
        assert_eq!(
            ServiceCode1::International.to_string(),
            "International interchange OK"
        );
        assert_eq!(ServiceCode1::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ServiceCode1::InternationalIc).unwrap();
        assert_eq!(json, "\"international_ic\"");
    }
}
