//! A set of board positions (81 cells).

use crate::{House, HouseSet, Position, bit_set::bit_set};

bit_set! {
    /// A set of board positions, typically the cells where one digit is
    /// still a candidate.
    ///
    /// Bit *i* is the cell with linear index *i* (`y * 9 + x`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sashimi_core::{DigitPositions, House, Position};
    ///
    /// let row = House::Row { y: 0 }.positions();
    /// let col = House::Column { x: 0 }.positions();
    /// assert_eq!((row & col).as_single(), Some(Position::new(0, 0)));
    /// assert_eq!((row | col).len(), 17);
    /// ```
    pub struct DigitPositions: u128[81] of Position;
    /// Iterator over the positions of a [`DigitPositions`] in cell index order.
    pub struct DigitPositionsIter;
}

const fn row_bits(y: u8) -> u128 {
    0x1ff_u128 << (y as u32 * 9)
}

const fn column_bits(x: u8) -> u128 {
    let mut bits: u128 = 0;
    let mut y: u32 = 0;
    while y < 9 {
        let bit: u128 = 1 << (y * 9 + x as u32);
        bits |= bit;
        y += 1;
    }
    bits
}

const fn box_bits(box_index: u8) -> u128 {
    let origin = Position::box_origin(box_index);
    let mut bits: u128 = 0;
    let mut i = 0;
    while i < 9 {
        let pos = Position::new(origin.x() + i % 3, origin.y() + i / 3);
        let bit: u128 = 1 << pos.index();
        bits |= bit;
        i += 1;
    }
    bits
}

impl DigitPositions {
    /// Positions of each row, indexed by y.
    pub const ROW_POSITIONS: [Self; 9] = {
        let mut table = [Self::EMPTY; 9];
        let mut y = 0;
        while y < 9 {
            table[y as usize] = Self { bits: row_bits(y) };
            y += 1;
        }
        table
    };

    /// Positions of each column, indexed by x.
    pub const COLUMN_POSITIONS: [Self; 9] = {
        let mut table = [Self::EMPTY; 9];
        let mut x = 0;
        while x < 9 {
            table[x as usize] = Self { bits: column_bits(x) };
            x += 1;
        }
        table
    };

    /// Positions of each box, indexed by box index.
    pub const BOX_POSITIONS: [Self; 9] = {
        let mut table = [Self::EMPTY; 9];
        let mut b = 0;
        while b < 9 {
            table[b as usize] = Self { bits: box_bits(b) };
            b += 1;
        }
        table
    };

    /// Positions of each house, indexed by house index (blocks, rows, columns).
    pub const HOUSE_POSITIONS: [Self; 27] = {
        let mut table = [Self::EMPTY; 27];
        let mut i = 0;
        while i < 9 {
            table[i] = Self::BOX_POSITIONS[i];
            table[9 + i] = Self::ROW_POSITIONS[i];
            table[18 + i] = Self::COLUMN_POSITIONS[i];
            i += 1;
        }
        table
    };

    /// Peers of each cell, indexed by cell index. A cell is not its own peer.
    pub const PEERS: [Self; 81] = {
        let mut table = [Self::EMPTY; 81];
        let mut i: u8 = 0;
        while i < 81 {
            let pos = Position::from_index(i);
            let bits = row_bits(pos.y()) | column_bits(pos.x()) | box_bits(pos.box_index());
            let own: u128 = 1 << i;
            table[i as usize] = Self { bits: bits & !own };
            i += 1;
        }
        table
    };

    /// Returns the houses containing at least one position of the set.
    #[must_use]
    pub fn houses(self) -> HouseSet {
        let mut houses = HouseSet::new();
        for pos in self {
            houses.extend(pos.houses());
        }
        houses
    }

    /// Returns the cells seen by every position of the set.
    ///
    /// Members of the set are never included. The empty set yields [`FULL`](Self::FULL).
    #[must_use]
    pub fn peer_intersection(self) -> Self {
        let mut common = Self::FULL;
        for pos in self {
            common &= pos.peers();
        }
        common - self
    }

    /// Returns the cells in `self` that lie in `house`.
    #[must_use]
    #[inline]
    pub fn in_house(self, house: House) -> Self {
        self & house.positions()
    }
}
