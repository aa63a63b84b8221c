//! Per-digit candidate bitboards.
//!
//! [`CandidateGrid`] stores, for each digit, the [`DigitPositions`] where the
//! digit is still possible. Pattern searches read whole digit planes at once
//! and intersect them with house masks, so this layout keeps every query a
//! handful of `u128` operations.
//!
//! # Examples
//!
//! ```
//! use sashimi_core::{CandidateGrid, Digit, Position};
//!
//! let mut grid = CandidateGrid::new();
//! grid.place(Position::new(4, 4), Digit::D5);
//!
//! assert!(!grid.candidates_at(Position::new(4, 0)).contains(Digit::D5));
//! assert_eq!(grid.digit_positions(Digit::D5).len(), 81 - 20);
//! assert!(grid.check_consistency().is_ok());
//! ```

use derive_more::{Display, Error};

use crate::{Digit, DigitGrid, DigitPositions, DigitSet, House, Position};

/// Reasons a candidate grid cannot lead to a valid solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConsistencyError {
    /// A cell has no remaining candidate.
    #[display("no candidates remain at {pos}")]
    NoCandidates {
        /// The empty cell.
        pos: Position,
    },
    /// A house has no remaining position for a digit.
    #[display("digit {digit} has no position left in {house}")]
    MissingDigit {
        /// The house missing the digit.
        house: House,
        /// The missing digit.
        digit: Digit,
    },
    /// Two decided cells that see each other hold the same digit.
    #[display("candidate constraint violation")]
    CandidateConstraintViolation,
}

/// Candidate positions for every digit on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateGrid {
    /// `digits[i]` holds the positions of the digit with index `i`.
    digits: [DigitPositions; 9],
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DigitGrid> for CandidateGrid {
    fn from(grid: DigitGrid) -> Self {
        Self::from_digit_grid(&grid)
    }
}

impl CandidateGrid {
    /// Creates a grid where every digit is a candidate in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digits: [DigitPositions::FULL; 9],
        }
    }

    /// Creates a grid from explicit per-digit candidate planes, indexed by digit index.
    #[must_use]
    pub const fn from_digit_positions(digits: [DigitPositions; 9]) -> Self {
        Self { digits }
    }

    /// Builds a candidate grid from the givens of a digit grid.
    ///
    /// Each given is placed and removed from its peers.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut candidates = Self::new();
        for (pos, digit) in grid.iter_filled() {
            candidates.place(pos, digit);
        }
        candidates
    }

    /// Places `digit` at `pos`: other candidates at the cell are removed, and
    /// `digit` is removed from every peer.
    ///
    /// Returns `true` if the grid changed.
    pub fn place(&mut self, pos: Position, digit: Digit) -> bool {
        let before = self.digits;
        for (i, plane) in (0..).zip(&mut self.digits) {
            if i != digit.index() {
                plane.remove(pos);
            }
        }
        let plane = &mut self.digits[usize::from(digit.index())];
        *plane -= pos.peers();
        plane.insert(pos);
        before != self.digits
    }

    /// Removes `digit` as a candidate at `pos`. Returns `true` if it was present.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.digits[usize::from(digit.index())].remove(pos)
    }

    /// Removes `digit` from every position in `mask`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn remove_candidate_with_mask(&mut self, mask: DigitPositions, digit: Digit) -> bool {
        let plane = &mut self.digits[usize::from(digit.index())];
        let changed = plane.intersects(mask);
        *plane -= mask;
        changed
    }

    /// Returns the positions where `digit` is still a candidate.
    #[must_use]
    #[inline]
    pub fn digit_positions(&self, digit: Digit) -> DigitPositions {
        self.digits[usize::from(digit.index())]
    }

    /// Returns the candidate digits at `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|digit| self.digit_positions(*digit).contains(pos))
            .collect()
    }

    /// Returns the cells holding exactly one candidate.
    #[must_use]
    pub fn decided_cells(&self) -> DigitPositions {
        let mut seen = DigitPositions::EMPTY;
        let mut repeated = DigitPositions::EMPTY;
        for plane in self.digits {
            repeated |= seen & plane;
            seen |= plane;
        }
        seen - repeated
    }

    /// Returns the decided cells holding `digit`.
    #[must_use]
    pub fn decided_positions(&self, digit: Digit) -> DigitPositions {
        self.decided_cells() & self.digit_positions(digit)
    }

    /// Checks that the grid can still lead to a solution.
    ///
    /// # Errors
    ///
    /// - [`ConsistencyError::NoCandidates`] if a cell has no candidate.
    /// - [`ConsistencyError::MissingDigit`] if a house has lost every position for a digit.
    /// - [`ConsistencyError::CandidateConstraintViolation`] if two decided
    ///   peers hold the same digit.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let covered = self
            .digits
            .iter()
            .fold(DigitPositions::EMPTY, |acc, plane| acc | *plane);
        if let Some(pos) = (!covered).first() {
            return Err(ConsistencyError::NoCandidates { pos });
        }

        for digit in Digit::ALL {
            let plane = self.digit_positions(digit);
            for house in House::ALL {
                if !plane.intersects(house.positions()) {
                    return Err(ConsistencyError::MissingDigit { house, digit });
                }
            }
        }

        let decided = self.decided_cells();
        for digit in Digit::ALL {
            let placed = decided & self.digit_positions(digit);
            if placed.iter().any(|pos| pos.peers().intersects(placed)) {
                return Err(ConsistencyError::CandidateConstraintViolation);
            }
        }
        Ok(())
    }
}
