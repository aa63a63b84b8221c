use sashimi_core::{
    CandidateGrid, ConsistencyError, Digit, DigitGrid, DigitPositions, DigitSet, Position,
};

/// Solver state for technique-based searches.
///
/// This type wraps a [`CandidateGrid`] and exposes the operations techniques
/// need (candidate queries and eliminations) without leaking direct
/// candidate access.
///
/// Conversions from [`DigitGrid`] and [`CandidateGrid`] exist to support
/// search entry points and test setups.
///
/// # Examples
///
/// ```
/// use sashimi_core::{Digit, Position};
/// use sashimi_solver::TechniqueGrid;
///
/// let mut grid = TechniqueGrid::new();
/// assert!(grid.remove_candidate(Position::new(0, 0), Digit::D1));
/// assert_eq!(grid.digit_positions(Digit::D1).len(), 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueGrid {
    candidates: CandidateGrid,
}

impl From<DigitGrid> for TechniqueGrid {
    fn from(grid: DigitGrid) -> Self {
        CandidateGrid::from(grid).into()
    }
}

impl From<CandidateGrid> for TechniqueGrid {
    fn from(candidates: CandidateGrid) -> Self {
        Self { candidates }
    }
}

impl Default for TechniqueGrid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TechniqueGrid {
    /// Creates a technique grid with all candidates available.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from(CandidateGrid::new())
    }

    /// Builds a technique grid from a digit grid.
    ///
    /// This is a convenience wrapper around [`CandidateGrid::from_digit_grid`].
    #[inline]
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        Self::from(CandidateGrid::from_digit_grid(grid))
    }

    /// Removes a specific digit as a candidate at a position.
    ///
    /// Returns `true` if the candidate was removed.
    #[inline]
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates.remove_candidate(pos, digit)
    }

    /// Removes a candidate digit from all positions specified by a mask.
    ///
    /// Returns `true` if any candidate was removed.
    #[inline]
    pub fn remove_candidate_with_mask(&mut self, mask: DigitPositions, digit: Digit) -> bool {
        self.candidates.remove_candidate_with_mask(mask, digit)
    }

    /// Returns the set of all positions where the specified digit can be placed.
    #[inline]
    #[must_use]
    pub fn digit_positions(&self, digit: Digit) -> DigitPositions {
        self.candidates.digit_positions(digit)
    }

    /// Returns the set of candidate digits that can be placed at a position.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates.candidates_at(pos)
    }

    /// Returns the decided cells holding `digit`.
    #[inline]
    #[must_use]
    pub fn decided_positions(&self, digit: Digit) -> DigitPositions {
        self.candidates.decided_positions(digit)
    }

    /// Checks whether the candidate grid is consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the grid contains contradictions.
    #[inline]
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.candidates.check_consistency()
    }
}
