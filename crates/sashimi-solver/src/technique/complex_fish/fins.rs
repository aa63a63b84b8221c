//! Fin, elimination and cannibalism classification for a base/cover pair.

use sashimi_core::{DigitPositions, HouseSet};

/// Returns the cells of `cells` that lie in two or more houses of `base`.
pub(crate) fn endofins(base: HouseSet, cells: DigitPositions) -> DigitPositions {
    let mut seen = DigitPositions::EMPTY;
    let mut repeated = DigitPositions::EMPTY;
    for house in base {
        let in_house = cells.in_house(house);
        repeated |= seen & in_house;
        seen |= in_house;
    }
    repeated
}

/// Outcome of classifying a complete base/cover pair against a digit's candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FinAnalysis {
    /// Candidates in the base houses.
    pub(crate) base_candidates: DigitPositions,
    /// Base candidates outside every cover house.
    pub(crate) exofins: DigitPositions,
    /// Base candidates shared by two or more base houses.
    pub(crate) endofins: DigitPositions,
    /// Base candidates lying in exactly two cover houses (fin-less patterns only).
    pub(crate) cannibals: DigitPositions,
    /// Candidates removed by the pattern.
    pub(crate) eliminations: DigitPositions,
}

impl FinAnalysis {
    /// Classifies a base/cover pair.
    ///
    /// Returns `None` when the pattern has endo-fins or eliminates nothing.
    pub(crate) fn classify(
        base: HouseSet,
        cover: HouseSet,
        candidates: DigitPositions,
    ) -> Option<Self> {
        let base_candidates = base.cells() & candidates;
        let endofins = endofins(base, candidates);
        if !endofins.is_empty() {
            return None;
        }
        let cover_cells = cover.cells();
        let exofins = base_candidates - cover_cells - endofins;
        let fins = exofins | endofins;

        let mut eliminations = (cover_cells & candidates) - base_candidates;
        let mut cannibals = DigitPositions::EMPTY;
        if fins.is_empty() {
            cannibals = base_candidates
                .iter()
                .filter(|pos| cover.count_containing(*pos) == 2)
                .collect();
            eliminations |= cannibals;
        } else {
            eliminations &= fins.peer_intersection();
        }
        if eliminations.is_empty() {
            return None;
        }

        Some(Self {
            base_candidates,
            exofins,
            endofins,
            cannibals,
            eliminations,
        })
    }

    /// Returns all fins.
    pub(crate) fn fins(&self) -> DigitPositions {
        self.exofins | self.endofins
    }

    /// Returns whether the pattern is sashimi.
    ///
    /// `None` when there are no fins; `Some(true)` when some base house keeps
    /// at most one candidate once the fins are removed.
    pub(crate) fn sashimi(&self, base: HouseSet) -> Option<bool> {
        let fins = self.fins();
        if fins.is_empty() {
            return None;
        }
        let body = self.base_candidates - fins;
        Some(base.iter().any(|house| body.in_house(house).len() <= 1))
    }
}
