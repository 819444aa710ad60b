//! Placed digit representation.

use std::fmt::{self, Display};

/// A placed digit in the range 1-9.
///
/// Invalid digit values are unrepresentable: construction from raw numbers
/// goes through [`Digit::try_from_value`], which rejects everything outside
/// 1-9. Note that 0 is not a digit; an empty cell is modeled by
/// [`Cell::Empty`](crate::Cell::Empty), not by a zero digit.
///
/// # Examples
///
/// ```
/// use gridproof_core::Digit;
///
/// let digit = Digit::try_from_value(7).unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
///
/// // 0 and 10 are not digits
/// assert_eq!(Digit::try_from_value(0), None);
/// assert_eq!(Digit::try_from_value(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a raw value, rejecting anything outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridproof_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(1), Some(Digit::D1));
    /// assert_eq!(Digit::try_from_value(9), Some(Digit::D9));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the bit index of this digit (0-8), used by
    /// [`DigitSet`](crate::DigitSet).
    #[must_use]
    pub(crate) const fn bit_index(self) -> u8 {
        self as u8 - 1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
