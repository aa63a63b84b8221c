//! Board positions.

use std::fmt::{self, Display};

use crate::{
    DigitPositions, House, HouseType,
    bit_set::SetElement,
};

/// A cell position on the board, `x` being the column and `y` the row (both 0-8).
///
/// The linear cell index is `y * 9 + x` (0-80, row-major).
///
/// # Examples
///
/// ```
/// use sashimi_core::{House, HouseType, Position};
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 22);
/// assert_eq!(pos.box_index(), 1);
/// assert_eq!(pos.house(HouseType::Row), House::Row { y: 2 });
/// assert_eq!(pos.to_string(), "r3c5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "Position coordinates must be 0-8");
        Self { x, y }
    }

    /// Creates a position from its linear cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81, "Cell index must be 0-80");
        Self {
            x: index % 9,
            y: index / 9,
        }
    }

    /// Creates a position from a box index and the cell index inside that box
    /// (both 0-8, left to right, top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9, "Box indices must be 0-8");
        let origin = Self::box_origin(box_index);
        Self::new(origin.x + i % 3, origin.y + i / 3)
    }

    /// Returns the top-left position of a box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn box_origin(box_index: u8) -> Self {
        assert!(box_index < 9, "Box index must be 0-8");
        Self::new(box_index % 3 * 3, box_index / 3 * 3)
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the linear cell index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Returns the index of the box containing this position.
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the house of the given type that contains this position.
    #[must_use]
    #[inline]
    pub const fn house(self, house_type: HouseType) -> House {
        match house_type {
            HouseType::Block => House::Block {
                index: self.box_index(),
            },
            HouseType::Row => House::Row { y: self.y },
            HouseType::Column => House::Column { x: self.x },
        }
    }

    /// Returns the three houses containing this position, block first.
    #[must_use]
    #[inline]
    pub const fn houses(self) -> [House; 3] {
        [
            self.house(HouseType::Block),
            self.house(HouseType::Row),
            self.house(HouseType::Column),
        ]
    }

    /// Returns every other cell sharing a house with this position.
    ///
    /// The position itself is not a member.
    #[must_use]
    #[inline]
    pub fn peers(self) -> DigitPositions {
        DigitPositions::PEERS[usize::from(self.index())]
    }

    /// Returns `true` if both positions share a house and are not equal.
    #[must_use]
    #[inline]
    pub fn sees(self, other: Self) -> bool {
        self.peers().contains(other)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y + 1, self.x + 1)
    }
}

impl SetElement for Position {
    #[inline]
    fn to_bit(self) -> u32 {
        u32::from(self.index())
    }

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn from_bit(bit: u32) -> Self {
        Position::from_index(bit as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_and_boxes() {
        for index in 0..81 {
            let pos = Position::from_index(index);
            assert_eq!(pos.index(), index);
            assert_eq!(Position::from_box(pos.box_index(), pos.y() % 3 * 3 + pos.x() % 3), pos);
        }
        assert_eq!(Position::box_origin(5), Position::new(6, 3));
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_houses() {
        let pos = Position::new(7, 4);
        assert_eq!(
            pos.houses(),
            [
                House::Block { index: 5 },
                House::Row { y: 4 },
                House::Column { x: 7 },
            ]
        );
        for house in pos.houses() {
            assert!(house.positions().contains(pos));
        }
    }

    #[test]
    fn test_peers() {
        let pos = Position::new(0, 0);
        let peers = pos.peers();
        assert_eq!(peers.len(), 20);
        assert!(!peers.contains(pos));
        assert!(pos.sees(Position::new(8, 0)));
        assert!(pos.sees(Position::new(0, 8)));
        assert!(pos.sees(Position::new(2, 2)));
        assert!(!pos.sees(Position::new(3, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(0, 0).to_string(), "r1c1");
        assert_eq!(Position::new(4, 8).to_string(), "r9c5");
    }

    #[test]
    #[should_panic(expected = "Position coordinates must be 0-8")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
