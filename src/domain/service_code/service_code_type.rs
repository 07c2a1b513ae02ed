//! Shared behavior of the three service code position enums.

use std::fmt;

/// A closed enumeration of the codes defined for one service code position.
///
/// Every implementation has exactly one `UNKNOWN` member, which carries no
/// digit and is the fallback for missing or unrecognized input.
pub trait ServiceCodeType: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// The member used when a position cannot be decoded.
    const UNKNOWN: Self;

    /// Returns all members in declaration order, `UNKNOWN` included.
    fn all() -> &'static [Self];

    /// Returns the digit this member is encoded as, or `None` for `UNKNOWN`.
    fn value(&self) -> Option<u8>;

    /// Returns the human-readable meaning of this member.
    fn description(&self) -> &'static str;

    /// Returns the reverse lookup table for this enumeration.
    fn digit_table() -> &'static DigitTable<Self>;

    /// Looks up the member encoded by `digit`, falling back to `UNKNOWN`.
    fn from_digit(digit: u8) -> Self {
        Self::digit_table().get(digit).unwrap_or(Self::UNKNOWN)
    }

    /// Returns true if this is the `UNKNOWN` member.
    fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

/// Reverse lookup from a decimal digit to the member it encodes.
#[derive(Debug)]
pub struct DigitTable<S> {
    slots: [Option<S>; 10],
}

impl<S: ServiceCodeType> DigitTable<S> {
    /// Builds the table from [`ServiceCodeType::all`].
    ///
    /// Members are visited in declaration order and the first member claiming
    /// a digit keeps it.
    pub fn build() -> Self {
        let mut slots: [Option<S>; 10] = [None; 10];
        for member in S::all() {
            let Some(value) = member.value() else {
                continue;
            };
            if let Some(slot) = slots.get_mut(usize::from(value)) {
                if slot.is_none() {
                    *slot = Some(*member);
                }
            }
        }
        Self { slots }
    }

    /// Returns the member for `digit`, if one is defined.
    pub fn get(&self, digit: u8) -> Option<S> {
        self.slots.get(usize::from(digit)).copied().flatten()
    }

    /// Returns the digits that have a defined member, in ascending order.
    pub fn defined_digits(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..10).filter(move |digit| self.get(*digit).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shadowed {
        First,
        Second,
        Other,
        Unknown,
    }

    static SHADOWED_DIGITS: Lazy<DigitTable<Shadowed>> = Lazy::new(DigitTable::build);

    impl ServiceCodeType for Shadowed {
        const UNKNOWN: Self = Shadowed::Unknown;

        fn all() -> &'static [Self] {
            &[
                Shadowed::First,
                Shadowed::Second,
                Shadowed::Other,
                Shadowed::Unknown,
            ]
        }

        fn value(&self) -> Option<u8> {
            match self {
                Shadowed::First | Shadowed::Second => Some(3),
                Shadowed::Other => Some(9),
                Shadowed::Unknown => None,
            }
        }

        fn description(&self) -> &'static str {
            "test"
        }

        fn digit_table() -> &'static DigitTable<Self> {
            &SHADOWED_DIGITS
        }
    }

    #[test]
    fn first_declared_member_wins_a_shared_digit() {
        assert_eq!(Shadowed::from_digit(3), Shadowed::First);
    }

    #[test]
    fn unmatched_digit_falls_back_to_unknown() {
        assert_eq!(Shadowed::from_digit(0), Shadowed::Unknown);
        assert!(Shadowed::from_digit(0).is_unknown());
    }

    #[test]
    fn out_of_range_digit_falls_back_to_unknown() {
        assert_eq!(Shadowed::from_digit(10), Shadowed::Unknown);
        assert_eq!(Shadowed::from_digit(u8::MAX), Shadowed::Unknown);
    }

    #[test]
    fn defined_digits_lists_claimed_slots() {
        let digits: Vec<u8> = Shadowed::digit_table().defined_digits().collect();
        assert_eq!(digits, vec![3, 9]);
    }
}
