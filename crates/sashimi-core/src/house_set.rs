//! A set of houses (27 bits).

use crate::{DigitPositions, House, HouseTypes, Position, bit_set::bit_set};

bit_set! {
    /// A set of houses. Bit *i* is the house with index *i*
    /// (blocks 0-8, rows 9-17, columns 18-26).
    ///
    /// # Examples
    ///
    /// ```
    /// use sashimi_core::{House, HouseSet, HouseTypes};
    ///
    /// let set = HouseSet::from_iter([House::Row { y: 0 }, House::Column { x: 4 }]);
    /// assert_eq!(set.types(), HouseTypes::LINES);
    /// assert_eq!(set.cells().len(), 17);
    /// ```
    pub struct HouseSet: u32[27] of House;
    /// Iterator over the houses of a [`HouseSet`] in house index order.
    pub struct HouseSetIter;
}

impl HouseSet {
    /// Returns the union of the cells of every house in the set.
    #[must_use]
    pub fn cells(self) -> DigitPositions {
        self.iter()
            .fold(DigitPositions::EMPTY, |acc, house| acc | house.positions())
    }

    /// Returns the kinds of house present in the set.
    #[must_use]
    pub fn types(self) -> HouseTypes {
        self.iter().fold(HouseTypes::empty(), |acc, house| {
            acc | house.house_type().as_flag()
        })
    }

    /// Returns how many houses of the set contain `pos`.
    #[must_use]
    pub fn count_containing(self, pos: Position) -> usize {
        pos.houses()
            .into_iter()
            .filter(|house| self.contains(*house))
            .count()
    }
}
