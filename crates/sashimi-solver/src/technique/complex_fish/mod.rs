//! Complex fish: Franken and Mutant fish with fins, cannibalism and Siamese
//! merging.
//!
//! A fish for a digit is a set of *k* base houses whose candidates are all
//! contained in *k* cover houses. Each base house must hold the digit once,
//! so the cover houses are filled by the base and every other candidate in
//! the cover can go. Base candidates outside the cover are *fins*; when
//! there are fins, only cells that see every fin are eliminated.
//!
//! The search is driven by the pattern overlay pre-filter: only candidates
//! that belong to no template are used as anchors, and digits without any
//! such candidate are skipped.

use std::ops::ControlFlow;

use log::debug;
use rayon::prelude::*;
use sashimi_core::Digit;

pub use self::{
    kind::FishKind,
    search::SearchStats,
    step::{ComplexFishStep, FishStep, SiameseFishStep, size_name},
};
use self::search::DigitSearch;
use super::Technique;
use crate::{
    BoxedTechniqueStep, ComplexFishConfig, EliminationFilter, PatternOverlay, SolverError,
    TechniqueGrid,
};

mod fins;
mod kind;
mod search;
mod siamese;
mod step;

const NAME: &str = "Complex Fish";

/// A technique that finds Franken and Mutant fish of size 2 up to the
/// configured maximum.
///
/// # Examples
///
/// ```
/// use sashimi_core::{CandidateGrid, Digit, Position};
/// use sashimi_solver::{TechniqueGrid, technique::ComplexFish};
///
/// // Digit 5 is confined to columns 1 and 5 in rows 1 and 9.
/// let mut grid = CandidateGrid::new();
/// for y in [0, 8] {
///     for x in [1, 2, 3, 5, 6, 7, 8] {
///         grid.remove_candidate(Position::new(x, y), Digit::D5);
///     }
/// }
///
/// let fish = ComplexFish::new().collect(&TechniqueGrid::from(grid));
/// assert!(fish.iter().any(|step| step.eliminations().len() == 14));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ComplexFish {
    config: ComplexFishConfig,
}

impl ComplexFish {
    /// Creates a new `ComplexFish` technique with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ComplexFish` technique with the given configuration.
    #[must_use]
    pub const fn with_config(config: ComplexFishConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> ComplexFishConfig {
        self.config
    }

    /// Returns every fish in the grid, using [`PatternOverlay`] as the pre-filter.
    ///
    /// Results are ordered by digit, then by discovery order. Siamese merging
    /// is applied when enabled in the configuration.
    #[must_use]
    pub fn collect(&self, grid: &TechniqueGrid) -> Vec<FishStep> {
        let mut stats = SearchStats::default();
        self.collect_with_filter(grid, &PatternOverlay::new(), &mut stats)
    }

    /// Returns every fish in the grid, using `filter` as the pre-filter.
    ///
    /// Digits are searched in parallel; the output order does not depend on
    /// scheduling. Work counters are added to `stats`.
    pub fn collect_with_filter<F>(
        &self,
        grid: &TechniqueGrid,
        filter: &F,
        stats: &mut SearchStats,
    ) -> Vec<FishStep>
    where
        F: EliminationFilter + ?Sized,
    {
        let targets = filter.possible_eliminations(grid);
        let per_digit: Vec<(Vec<ComplexFishStep>, SearchStats)> = Digit::ALL
            .par_iter()
            .map(|&digit| {
                let mut digit_stats = SearchStats::default();
                let digit_targets = targets[usize::from(digit.index())];
                if digit_targets.is_empty() {
                    debug!("digit {digit}: no possible eliminations, skipped");
                    return (Vec::new(), digit_stats);
                }
                digit_stats.digits_searched += 1;
                let search = DigitSearch::new(digit, grid.digit_positions(digit), self.config);
                let found = search.collect(digit_targets, &mut digit_stats);
                debug!(
                    "digit {digit}: {} fish from {} anchors",
                    found.len(),
                    digit_stats.anchors_searched
                );
                (found, digit_stats)
            })
            .collect();

        let mut steps = Vec::new();
        for (found, digit_stats) in per_digit {
            steps.extend(found);
            *stats += digit_stats;
        }

        if self.config.allow_siamese() {
            siamese::merge(steps)
        } else {
            steps.into_iter().map(FishStep::Complex).collect()
        }
    }

    fn find_first(&self, grid: &TechniqueGrid) -> Option<ComplexFishStep> {
        let targets = PatternOverlay::new().possible_eliminations(grid);
        let mut stats = SearchStats::default();
        for digit in Digit::ALL {
            let digit_targets = targets[usize::from(digit.index())];
            if digit_targets.is_empty() {
                continue;
            }
            let search = DigitSearch::new(digit, grid.digit_positions(digit), self.config);
            if let ControlFlow::Break(step) =
                search.run(digit_targets, &mut stats, ControlFlow::Break)
            {
                return Some(step);
            }
        }
        None
    }
}

impl Technique for ComplexFish {
    fn name(&self) -> &'static str {
        NAME
    }

    fn find_step(&self, grid: &TechniqueGrid) -> Result<Option<BoxedTechniqueStep>, SolverError> {
        grid.check_consistency()?;
        Ok(self
            .find_first(grid)
            .map(|step| Box::new(FishStep::Complex(step)) as BoxedTechniqueStep))
    }

    fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
        grid.check_consistency()?;
        let mut changed = false;
        for step in self.collect(grid) {
            changed |= grid.remove_candidate_with_mask(step.eliminations(), step.digit());
        }
        Ok(changed)
    }
}
