use std::fmt::Debug;

use crate::{BoxedTechniqueStep, SolverError, TechniqueGrid};

/// A candidate-elimination search run against a [`TechniqueGrid`].
///
/// Implementations are stateless with respect to the grid, so one value can
/// search many grids and be shared between threads.
pub trait Technique: Debug + Send + Sync {
    /// Returns the display name of the technique.
    fn name(&self) -> &'static str;

    /// Returns the first pattern the search reaches, leaving the grid untouched.
    ///
    /// Returns `Ok(None)` when the grid holds no pattern with eliminations.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid is inconsistent.
    fn find_step(&self, grid: &TechniqueGrid) -> Result<Option<BoxedTechniqueStep>, SolverError>;

    /// Removes the eliminations of every pattern found in one pass.
    ///
    /// Returns `Ok(true)` if at least one candidate was removed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid is inconsistent.
    fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError>;
}

/// A technique behind a trait object, as listed by
/// [`all_techniques`](super::all_techniques).
pub type BoxedTechnique = Box<dyn Technique>;
