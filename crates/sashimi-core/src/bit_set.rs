//! Fixed-width bit sets shared by the digit, cell and house set types.
//!
//! Each concrete set is generated by [`bit_set!`] on top of an unsigned
//! integer. The element type maps itself onto a bit through [`SetElement`];
//! everything above this module works with named set operations only.

/// Maps a value onto a bit of a fixed-width set.
pub(crate) trait SetElement: Copy {
    /// Returns the bit index of this value.
    fn to_bit(self) -> u32;

    /// Returns the value stored at `bit`.
    fn from_bit(bit: u32) -> Self;
}

macro_rules! bit_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $bits:ty[$width:expr] of $elem:ty;
        $(#[$iter_meta:meta])*
        pub struct $iter:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            bits: $bits,
        }

        impl $name {
            /// Number of elements the set can hold.
            pub const CAPACITY: usize = $width;

            const MASK: $bits = <$bits>::MAX >> (<$bits>::BITS - $width);

            /// The empty set.
            pub const EMPTY: Self = Self { bits: 0 };

            /// The set holding every element.
            pub const FULL: Self = Self { bits: Self::MASK };

            /// Creates an empty set.
            #[must_use]
            #[inline]
            pub const fn new() -> Self {
                Self::EMPTY
            }

            /// Creates a set from its raw bit representation.
            ///
            /// Returns `None` if any bit outside the set's width is set.
            #[must_use]
            #[inline]
            pub const fn try_from_bits(bits: $bits) -> Option<Self> {
                if bits & !Self::MASK == 0 {
                    Some(Self { bits })
                } else {
                    None
                }
            }

            /// Returns the raw bit representation.
            #[must_use]
            #[inline]
            pub const fn bits(self) -> $bits {
                self.bits
            }

            /// Creates a set holding a single element.
            #[must_use]
            #[inline]
            pub fn from_elem(elem: $elem) -> Self {
                let bit: $bits = 1 << $crate::bit_set::SetElement::to_bit(elem);
                Self { bits: bit }
            }

            /// Adds an element. Returns `true` if it was not present.
            #[inline]
            pub fn insert(&mut self, elem: $elem) -> bool {
                let bit: $bits = 1 << $crate::bit_set::SetElement::to_bit(elem);
                let inserted = self.bits & bit == 0;
                self.bits |= bit;
                inserted
            }

            /// Removes an element. Returns `true` if it was present.
            #[inline]
            pub fn remove(&mut self, elem: $elem) -> bool {
                let bit: $bits = 1 << $crate::bit_set::SetElement::to_bit(elem);
                let removed = self.bits & bit != 0;
                self.bits &= !bit;
                removed
            }

            /// Returns `true` if the set holds `elem`.
            #[must_use]
            #[inline]
            pub fn contains(self, elem: $elem) -> bool {
                let bit: $bits = 1 << $crate::bit_set::SetElement::to_bit(elem);
                self.bits & bit != 0
            }

            /// Returns the number of elements.
            #[must_use]
            #[inline]
            pub const fn len(self) -> usize {
                self.bits.count_ones() as usize
            }

            /// Returns `true` if the set holds no element.
            #[must_use]
            #[inline]
            pub const fn is_empty(self) -> bool {
                self.bits == 0
            }

            /// Returns the elements in either set.
            #[must_use]
            #[inline]
            pub const fn union(self, other: Self) -> Self {
                Self {
                    bits: self.bits | other.bits,
                }
            }

            /// Returns the elements in both sets.
            #[must_use]
            #[inline]
            pub const fn intersection(self, other: Self) -> Self {
                Self {
                    bits: self.bits & other.bits,
                }
            }

            /// Returns the elements of `self` that are not in `other`.
            #[must_use]
            #[inline]
            pub const fn difference(self, other: Self) -> Self {
                Self {
                    bits: self.bits & !other.bits,
                }
            }

            /// Returns `true` if every element of `self` is in `other`.
            #[must_use]
            #[inline]
            pub const fn is_subset(self, other: Self) -> bool {
                self.bits & !other.bits == 0
            }

            /// Returns `true` if every element of `other` is in `self`.
            #[must_use]
            #[inline]
            pub const fn is_superset(self, other: Self) -> bool {
                other.is_subset(self)
            }

            /// Returns `true` if the sets share at least one element.
            #[must_use]
            #[inline]
            pub const fn intersects(self, other: Self) -> bool {
                self.bits & other.bits != 0
            }

            /// Returns the smallest element, if any.
            #[must_use]
            #[inline]
            pub fn first(self) -> Option<$elem> {
                self.iter().next()
            }

            /// Returns the single element if the set holds exactly one.
            #[must_use]
            #[inline]
            pub fn as_single(self) -> Option<$elem> {
                (self.len() == 1).then(|| {
                    $crate::bit_set::SetElement::from_bit(self.bits.trailing_zeros())
                })
            }

            /// Returns an iterator over the elements in ascending bit order.
            #[inline]
            pub fn iter(self) -> $iter {
                $iter { bits: self.bits }
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl std::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = self.union(rhs);
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                self.intersection(rhs)
            }
        }

        impl std::ops::BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = self.intersection(rhs);
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.difference(rhs)
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.difference(rhs);
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self {
                    bits: !self.bits & Self::MASK,
                }
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                let mut set = Self::new();
                for elem in iter {
                    set.insert(elem);
                }
                set
            }
        }

        impl Extend<$elem> for $name {
            fn extend<I: IntoIterator<Item = $elem>>(&mut self, iter: I) {
                for elem in iter {
                    self.insert(elem);
                }
            }
        }

        impl IntoIterator for $name {
            type Item = $elem;
            type IntoIter = $iter;

            #[inline]
            fn into_iter(self) -> $iter {
                self.iter()
            }
        }

        $(#[$iter_meta])*
        #[derive(Debug, Clone)]
        pub struct $iter {
            bits: $bits,
        }

        impl Iterator for $iter {
            type Item = $elem;

            #[inline]
            fn next(&mut self) -> Option<$elem> {
                if self.bits == 0 {
                    return None;
                }
                let bit = self.bits.trailing_zeros();
                self.bits &= self.bits - 1;
                Some($crate::bit_set::SetElement::from_bit(bit))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = self.bits.count_ones() as usize;
                (len, Some(len))
            }
        }

        impl DoubleEndedIterator for $iter {
            #[inline]
            fn next_back(&mut self) -> Option<$elem> {
                if self.bits == 0 {
                    return None;
                }
                let bit = <$bits>::BITS - 1 - self.bits.leading_zeros();
                let mask: $bits = 1 << bit;
                self.bits &= !mask;
                Some($crate::bit_set::SetElement::from_bit(bit))
            }
        }

        impl ExactSizeIterator for $iter {}
        impl std::iter::FusedIterator for $iter {}
    };
}

pub(crate) use bit_set;
