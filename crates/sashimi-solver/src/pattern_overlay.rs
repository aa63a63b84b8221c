//! Pattern overlay pre-filter.
//!
//! A *template* for a digit is a placement of that digit in all nine rows
//! such that no two cells share a column or a block. Every candidate that
//! belongs to no template can never hold the digit in any solution, so it is
//! the only place a fish could possibly eliminate something. The complex fish
//! search uses these sets as its anchor targets and skips digits where the
//! set is empty.

use sashimi_core::{Digit, DigitPositions, House};

use crate::TechniqueGrid;

/// Supplies, per digit, the candidates a pattern search should target.
///
/// The returned array is indexed by [`Digit::index`]. An empty entry means
/// no elimination of that digit is possible, and the digit is skipped.
pub trait EliminationFilter: Sync {
    /// Returns the possible elimination targets for every digit.
    fn possible_eliminations(&self, grid: &TechniqueGrid) -> [DigitPositions; 9];
}

/// Template-based [`EliminationFilter`].
///
/// # Examples
///
/// ```
/// use sashimi_core::{Digit, DigitPositions};
/// use sashimi_solver::{EliminationFilter, PatternOverlay, TechniqueGrid};
///
/// // On an empty grid every candidate belongs to some template.
/// let targets = PatternOverlay::new().possible_eliminations(&TechniqueGrid::new());
/// assert_eq!(targets[usize::from(Digit::D1.index())], DigitPositions::EMPTY);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternOverlay {}

impl PatternOverlay {
    /// Creates a new `PatternOverlay` filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Returns the union of every template of `digit`.
    #[must_use]
    pub fn template_union(grid: &TechniqueGrid, digit: Digit) -> DigitPositions {
        let candidates = grid.digit_positions(digit);
        let decided = grid.decided_positions(digit);
        let mut search = TemplateSearch {
            candidates,
            decided,
            union: DigitPositions::EMPTY,
        };
        search.visit_row(0, 0, 0, DigitPositions::EMPTY);
        search.union
    }
}

impl EliminationFilter for PatternOverlay {
    fn possible_eliminations(&self, grid: &TechniqueGrid) -> [DigitPositions; 9] {
        Digit::ALL.map(|digit| grid.digit_positions(digit) - Self::template_union(grid, digit))
    }
}

struct TemplateSearch {
    candidates: DigitPositions,
    decided: DigitPositions,
    union: DigitPositions,
}

impl TemplateSearch {
    fn visit_row(&mut self, y: u8, used_columns: u16, used_blocks: u16, cells: DigitPositions) {
        if self.union == self.candidates {
            return;
        }
        if y == 9 {
            self.union |= cells;
            return;
        }
        let row = House::Row { y }.positions();
        let forced = self.decided & row;
        let options = if forced.is_empty() {
            self.candidates & row
        } else {
            forced
        };
        for pos in options {
            let column_bit: u16 = 1 << pos.x();
            let block_bit: u16 = 1 << pos.box_index();
            if used_columns & column_bit != 0 || used_blocks & block_bit != 0 {
                continue;
            }
            let mut next = cells;
            next.insert(pos);
            self.visit_row(y + 1, used_columns | column_bit, used_blocks | block_bit, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use sashimi_core::{CandidateGrid, Position};

    use super::*;

    #[test]
    fn test_empty_grid_has_no_targets() {
        let targets = PatternOverlay::new().possible_eliminations(&TechniqueGrid::new());
        for digit in Digit::ALL {
            assert!(targets[usize::from(digit.index())].is_empty());
        }
        assert_eq!(
            PatternOverlay::template_union(&TechniqueGrid::new(), Digit::D1),
            DigitPositions::FULL
        );
    }

    #[test]
    fn test_x_wing_victims_are_targets() {
        let mut grid = CandidateGrid::new();
        for y in [0, 8] {
            for x in 0..9 {
                if x != 0 && x != 4 {
                    grid.remove_candidate(Position::new(x, y), Digit::D5);
                }
            }
        }
        let grid = TechniqueGrid::from(grid);
        let targets = PatternOverlay::new().possible_eliminations(&grid)[usize::from(Digit::D5.index())];

        let expected = (House::Column { x: 0 }.positions() | House::Column { x: 4 }.positions())
            - House::Row { y: 0 }.positions()
            - House::Row { y: 8 }.positions();
        assert_eq!(targets, expected);
    }

    #[test]
    fn test_decided_cells_are_forced() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(3, 4);
        for digit in Digit::ALL {
            if digit != Digit::D2 {
                grid.remove_candidate(pos, digit);
            }
        }
        let grid = TechniqueGrid::from(grid);
        let targets = PatternOverlay::new().possible_eliminations(&grid)[usize::from(Digit::D2.index())];
        assert_eq!(targets, pos.peers());
    }
}
