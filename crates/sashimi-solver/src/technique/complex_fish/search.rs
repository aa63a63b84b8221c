//! Anchor-driven base/cover enumeration for one digit.
//!
//! For every target cell (an *anchor*) the search only looks for fish whose
//! last cover house contains the anchor: the remaining `k - 1` cover houses
//! must already hold every base candidate the anchor does not see. The cover
//! enumeration is therefore one house smaller than a blind search.

use std::{collections::HashSet, convert::Infallible, ops::ControlFlow};

use log::trace;
use sashimi_core::{Digit, DigitPositions, House, HouseSet};

use super::{
    ComplexFishStep, FishKind,
    fins::{self, FinAnalysis},
};
use crate::{
    ComplexFishConfig,
    combinations::{Combination, combinations},
};

/// Counters describing how much work a search did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Digits that had at least one target and were searched.
    pub digits_searched: usize,
    /// Anchor cells the search started from.
    pub anchors_searched: usize,
    /// Base house combinations examined.
    pub base_combinations: usize,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.digits_searched += rhs.digits_searched;
        self.anchors_searched += rhs.anchors_searched;
        self.base_combinations += rhs.base_combinations;
    }
}

/// Identity of a fish for de-duplication.
type FishKey = (Digit, HouseSet, HouseSet, DigitPositions, DigitPositions);

/// Search state for one digit.
pub(crate) struct DigitSearch {
    digit: Digit,
    candidates: DigitPositions,
    config: ComplexFishConfig,
}

impl DigitSearch {
    pub(crate) fn new(digit: Digit, candidates: DigitPositions, config: ComplexFishConfig) -> Self {
        Self {
            digit,
            candidates,
            config,
        }
    }

    /// Collects every distinct fish reachable from `targets`, in discovery order.
    pub(crate) fn collect(
        &self,
        targets: DigitPositions,
        stats: &mut SearchStats,
    ) -> Vec<ComplexFishStep> {
        let mut seen: HashSet<FishKey> = HashSet::new();
        let mut found = Vec::new();
        let ControlFlow::Continue(()) = self.run::<Infallible, _>(targets, stats, |step| {
            let key = (
                step.digit(),
                step.base(),
                step.cover(),
                step.exofins(),
                step.endofins(),
            );
            if seen.insert(key) {
                found.push(step);
            }
            ControlFlow::Continue(())
        });
        found
    }

    /// Runs the search, handing every fish to `on_found` until it breaks.
    pub(crate) fn run<B, F>(
        &self,
        targets: DigitPositions,
        stats: &mut SearchStats,
        mut on_found: F,
    ) -> ControlFlow<B>
    where
        F: FnMut(ComplexFishStep) -> ControlFlow<B>,
    {
        for anchor in targets {
            stats.anchors_searched += 1;
            let possible = self.candidates - anchor.peers() - DigitPositions::from_elem(anchor);
            let base_table: Combination<House> = possible.houses().iter().collect();
            let anchor_houses = anchor.houses();

            for size in self.config.sizes() {
                if base_table.len() < 2 * size {
                    break;
                }
                for kind in FishKind::ALL {
                    for base in combinations(&base_table, size) {
                        stats.base_combinations += 1;
                        let base = HouseSet::from_iter(base);
                        if !kind.admits_base(base) {
                            continue;
                        }
                        if !fins::endofins(base, possible).is_empty() {
                            continue;
                        }
                        self.cover_search(anchor_houses, base, possible, kind, &mut on_found)?;
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn cover_search<B, F>(
        &self,
        anchor_houses: [House; 3],
        base: HouseSet,
        possible: DigitPositions,
        kind: FishKind,
        on_found: &mut F,
    ) -> ControlFlow<B>
    where
        F: FnMut(ComplexFishStep) -> ControlFlow<B>,
    {
        let size = base.len();
        let base_cells = base.cells();
        let base_possible = base_cells & possible;
        if base_possible.len() > 9 * (size - 1) {
            return ControlFlow::Continue(());
        }
        let cover_table: Combination<House> = (base_possible.houses() - base).iter().collect();
        if cover_table.len() < size - 1 {
            return ControlFlow::Continue(());
        }

        for partial in combinations(&cover_table, size - 1) {
            let partial = HouseSet::from_iter(partial);
            if !partial.cells().is_superset(base_possible) {
                continue;
            }
            for last in anchor_houses {
                if base.contains(last) || partial.contains(last) {
                    continue;
                }
                let mut cover = partial;
                cover.insert(last);
                if !kind.accepts(base, cover) {
                    continue;
                }
                if !base_cells.intersects(last.positions()) {
                    continue;
                }
                let Some(analysis) = FinAnalysis::classify(base, cover, self.candidates) else {
                    continue;
                };
                let step = ComplexFishStep::new(self.digit, base, cover, &analysis);
                trace!(
                    "found {step}: digit {}, base {:?}, cover {:?}, eliminations {:?}",
                    step.digit(),
                    step.base(),
                    step.cover(),
                    step.eliminations()
                );
                on_found(step)?;
            }
        }
        ControlFlow::Continue(())
    }
}
