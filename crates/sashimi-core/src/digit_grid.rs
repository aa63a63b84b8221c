//! Digit grids (givens and decided cells).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// Errors returned when parsing a [`DigitGrid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DigitGridParseError {
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    InvalidLength {
        /// Number of cells found.
        found: usize,
    },
    /// The input contained a character that is neither a digit nor an empty marker.
    #[display("invalid character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Cell index at which it appeared.
        index: usize,
    },
}

/// A 9×9 grid of optional digits.
///
/// Parsing accepts `1`-`9` for filled cells and `.`, `_` or `0` for empty
/// ones; whitespace is ignored.
///
/// # Examples
///
/// ```
/// use sashimi_core::{Digit, DigitGrid, Position};
///
/// let text = format!("5{}", ".".repeat(80));
/// let grid: DigitGrid = text.parse()?;
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(1, 0)), None);
/// # Ok::<(), sashimi_core::DigitGridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.index())]
    }

    /// Sets or clears the digit at `pos`.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[usize::from(pos.index())] = digit;
    }

    /// Iterates over filled cells in cell index order.
    pub fn iter_filled(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        (0..81)
            .zip(&self.cells)
            .filter_map(|(i, cell)| cell.map(|digit| (Position::from_index(i), digit)))
    }
}

impl FromStr for DigitGrid {
    type Err = DigitGridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut index = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(DigitGridParseError::InvalidCharacter { ch, index }),
            };
            if index < 81 {
                grid.cells[index] = cell;
            }
            index += 1;
        }
        if index != 81 {
            return Err(DigitGridParseError::InvalidLength { found: index });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 9 == 0 {
                writeln!(f)?;
            }
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
