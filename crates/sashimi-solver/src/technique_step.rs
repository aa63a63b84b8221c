//! Hint steps produced by techniques.
//!
//! A step carries structured data only: the cells that justify it and the
//! candidates it removes. Rendering it as text or graphics is left to callers.

use std::fmt::Debug;

use sashimi_core::{DigitPositions, DigitSet};

/// Cells involved in a technique's applicability conditions.
pub type ConditionCells = DigitPositions;

/// Pairs of (cells, digits) involved in a technique's applicability conditions.
pub type ConditionDigitCells = Vec<(DigitPositions, DigitSet)>;

/// A hint step produced by a technique.
pub trait TechniqueStep: Debug + Send + Sync {
    /// Returns the name of the technique that produced this step.
    fn technique_name(&self) -> &'static str;

    /// Returns a boxed clone of the step.
    fn clone_box(&self) -> BoxedTechniqueStep;

    /// Returns the cells involved in the applicability conditions.
    ///
    /// These are the cells that justify applying the technique. Hint systems may
    /// use this to highlight relevant cells before naming the technique.
    fn condition_cells(&self) -> ConditionCells;

    /// Returns condition pairs of (cells, digits) involved in applicability.
    ///
    /// Each pair provides a set of cells and the digits that matter for the
    /// technique's conditions.
    fn condition_digit_cells(&self) -> ConditionDigitCells;

    /// Returns the candidate eliminations produced by applying the technique.
    fn application(&self) -> Vec<CandidateElimination>;
}

/// Candidates removed by a technique step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateElimination {
    /// Positions where candidates are removed.
    pub positions: DigitPositions,
    /// Digits to remove from the specified positions.
    pub digits: DigitSet,
}

/// A boxed technique step.
pub type BoxedTechniqueStep = Box<dyn TechniqueStep>;

impl Clone for BoxedTechniqueStep {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
