//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Digits are displayed as 1-9 but indexed as 0-8 when used to address
/// per-digit tables such as candidate planes.
///
/// # Examples
///
/// ```
/// use sashimi_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
/// assert_eq!(digit.index(), 4);
/// assert_eq!(Digit::from_index(4), Digit::D5);
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
    /// Array containing all digits from 1 to 9, in index order.
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

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// ```should_panic
    /// use sashimi_core::Digit;
    ///
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a value in the range 1-9, returning `None` otherwise.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1..=9 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    /// Creates a digit from its index in the range 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 9, "Digit index must be 0-8");
        Self::ALL[index as usize]
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the index of this digit (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Digit::from_value(1), Digit::D1);
        assert_eq!(Digit::from_value(9), Digit::D9);
        assert_eq!(Digit::D1.value(), 1);
        assert_eq!(Digit::D9.index(), 8);

        for (i, digit) in (0..).zip(Digit::ALL) {
            assert_eq!(digit.index(), i);
            assert_eq!(Digit::from_index(i), digit);
            assert_eq!(Digit::from_value(digit.value()), digit);
        }

        assert_eq!(format!("{}", Digit::D7), "7");
        assert_eq!(u8::from(Digit::D5), 5);
    }

    #[test]
    fn test_try_from_value_rejects_out_of_range() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(3), Some(Digit::D3));
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Digit index must be 0-8")]
    fn test_from_index_nine_panics() {
        let _ = Digit::from_index(9);
    }
}
