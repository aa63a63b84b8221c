//! A set of digits (1-9).

use crate::{
    Digit,
    bit_set::{SetElement, bit_set},
};

impl SetElement for Digit {
    #[inline]
    fn to_bit(self) -> u32 {
        u32::from(self.index())
    }

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn from_bit(bit: u32) -> Self {
        Digit::from_index(bit as u8)
    }
}

bit_set! {
    /// A set of digits, stored as 9 bits where bit *i* is the digit with index *i*.
    ///
    /// # Examples
    ///
    /// ```
    /// use sashimi_core::{Digit, DigitSet};
    ///
    /// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
    /// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
    ///
    /// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
    /// assert_eq!((a | b).len(), 4);
    /// assert_eq!(a - b, DigitSet::from_elem(Digit::D1));
    /// ```
    pub struct DigitSet: u16[9] of Digit;
    /// Iterator over the digits of a [`DigitSet`] in ascending order.
    pub struct DigitSetIter;
}
