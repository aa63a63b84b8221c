//! Houses (blocks, rows and columns) and house types.

use std::fmt::{self, Display};

use crate::{DigitPositions, Position, bit_set::SetElement};

/// The three kinds of house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HouseType {
    /// A 3×3 block.
    Block,
    /// A row.
    Row,
    /// A column.
    Column,
}

impl HouseType {
    /// All house types, in house index order.
    pub const ALL: [Self; 3] = [Self::Block, Self::Row, Self::Column];

    /// Returns the single-flag [`HouseTypes`] value for this type.
    #[must_use]
    #[inline]
    pub const fn as_flag(self) -> HouseTypes {
        match self {
            HouseType::Block => HouseTypes::BLOCK,
            HouseType::Row => HouseTypes::ROW,
            HouseType::Column => HouseTypes::COLUMN,
        }
    }
}

bitflags::bitflags! {
    /// A set of house types, used to classify which kinds of houses a
    /// collection of houses spans.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HouseTypes: u8 {
        /// Blocks.
        const BLOCK = 0b001;
        /// Rows.
        const ROW = 0b010;
        /// Columns.
        const COLUMN = 0b100;
        /// Rows and columns.
        const LINES = Self::ROW.bits() | Self::COLUMN.bits();
    }
}

/// A Sudoku house.
///
/// Houses are numbered 0-26: blocks 0-8, rows 9-17 and columns 18-26.
///
/// # Examples
///
/// ```
/// use sashimi_core::{House, HouseType};
///
/// let house = House::from_index(12);
/// assert_eq!(house, House::Row { y: 3 });
/// assert_eq!(house.house_type(), HouseType::Row);
/// assert_eq!(house.positions().len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum House {
    /// A 3×3 block identified by its index (0-8, left to right, top to bottom).
    Block {
        /// Block index (0-8).
        index: u8,
    },
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
}

impl Default for House {
    fn default() -> Self {
        Self::Block { index: 0 }
    }
}

impl House {
    /// Number of houses on the board.
    pub const COUNT: usize = 27;

    /// All houses in index order (blocks, rows, columns).
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Block { index: 0 }; 27];
        let mut i: u8 = 0;
        while i < 27 {
            all[i as usize] = Self::from_index(i);
            i += 1;
        }
        all
    };

    /// Creates a house from its index (0-26).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 27 or greater.
    #[must_use]
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 27, "House index must be 0-26");
        match index / 9 {
            0 => Self::Block { index },
            1 => Self::Row { y: index - 9 },
            _ => Self::Column { x: index - 18 },
        }
    }

    /// Returns the house index (0-26).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            House::Block { index } => index,
            House::Row { y } => 9 + y,
            House::Column { x } => 18 + x,
        }
    }

    /// Returns the type of this house.
    #[must_use]
    #[inline]
    pub const fn house_type(self) -> HouseType {
        match self {
            House::Block { .. } => HouseType::Block,
            House::Row { .. } => HouseType::Row,
            House::Column { .. } => HouseType::Column,
        }
    }

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9, "Cell index must be 0-8");
        match self {
            House::Block { index } => Position::from_box(index, i),
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
        }
    }

    /// Returns all positions contained in this house.
    #[must_use]
    #[inline]
    pub fn positions(self) -> DigitPositions {
        DigitPositions::HOUSE_POSITIONS[usize::from(self.index())]
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Block { index } => write!(f, "b{}", index + 1),
            House::Row { y } => write!(f, "r{}", y + 1),
            House::Column { x } => write!(f, "c{}", x + 1),
        }
    }
}

impl SetElement for House {
    #[inline]
    fn to_bit(self) -> u32 {
        u32::from(self.index())
    }

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn from_bit(bit: u32) -> Self {
        House::from_index(bit as u8)
    }
}
