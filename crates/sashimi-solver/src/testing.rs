//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] tracks the initial and current state of a grid so a
//! test can apply a technique and assert on the candidates it removed.

use sashimi_core::{Digit, DigitSet, Position};

use crate::{BoxedTechniqueStep, TechniqueGrid, TechniqueStep, technique::Technique};

/// A test harness for verifying technique implementations.
///
/// All methods return `self` for chaining. Assertion methods panic with
/// detailed messages and report the caller's location.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: TechniqueGrid,
    current: TechniqueGrid,
    check_find_step_consistency: bool,
}

impl TechniqueTester {
    /// Creates a new tester from an initial grid state.
    pub fn new<T>(initial: T) -> Self
    where
        T: Into<TechniqueGrid>,
    {
        let initial = initial.into();
        let current = initial.clone();
        Self {
            initial,
            current,
            check_find_step_consistency: true,
        }
    }

    /// Disables `find_step`/`apply` consistency checks for this tester.
    #[must_use]
    pub fn without_find_step_consistency(mut self) -> Self {
        self.check_find_step_consistency = false;
        self
    }

    /// Applies the technique once.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.apply_checked(technique);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while self.apply_checked(technique) {}
        self
    }

    #[track_caller]
    fn apply_checked<T>(&mut self, technique: &T) -> bool
    where
        T: Technique,
    {
        let before = self.current.clone();
        let changed = technique.apply(&mut self.current).unwrap();
        if self.check_find_step_consistency {
            Self::assert_find_step_consistent_once(technique, &before, &self.current, changed);
        }
        changed
    }

    #[track_caller]
    fn assert_find_step_consistent_once<T>(
        technique: &T,
        before: &TechniqueGrid,
        after: &TechniqueGrid,
        changed: bool,
    ) where
        T: Technique,
    {
        let name = technique.name();
        match technique.find_step(before).unwrap() {
            None => {
                assert!(
                    !changed,
                    "Expected {name} to report no change when find_step returned None"
                );
                assert_eq!(before, after, "Expected candidates to remain unchanged");
            }
            Some(step) => {
                assert!(
                    changed,
                    "Expected {name} to report a change when find_step returned a step"
                );
                Self::assert_step_application_applied(before, &step, after);
            }
        }
    }

    #[track_caller]
    fn assert_step_application_applied(
        before: &TechniqueGrid,
        step: &BoxedTechniqueStep,
        after: &TechniqueGrid,
    ) {
        let name = step.technique_name();
        for elimination in step.application() {
            for pos in elimination.positions {
                let before_candidates = before.candidates_at(pos);
                let after_candidates = after.candidates_at(pos);
                for digit in elimination.digits {
                    if before_candidates.contains(digit) {
                        assert!(
                            !after_candidates.contains(digit),
                            "Expected {digit:?} to be removed from {pos} after applying {name}, but candidates are {after_candidates:?}"
                        );
                    }
                }
            }
        }
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// Other candidates may also have been removed.
    ///
    /// # Panics
    ///
    /// Panics if a digit was not initially present or is still present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {pos} to include {digits:?}, but initial candidates are: {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits:?} to be removed from {pos}, but {current:?} still contains some: {:?}",
            current & digits
        );
        self
    }

    /// Asserts that exactly the specified candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed candidates don't match the specified set.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits:?} to be removed from {pos}, but removed candidates are: {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use sashimi_core::DigitPositions;

    use super::*;
    use crate::{CandidateElimination, ConditionCells, ConditionDigitCells, SolverError};

    #[derive(Debug)]
    struct NoOpTechnique;

    impl Technique for NoOpTechnique {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn find_step(
            &self,
            _grid: &TechniqueGrid,
        ) -> Result<Option<BoxedTechniqueStep>, SolverError> {
            Ok(None)
        }

        fn apply(&self, _grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
            Ok(false)
        }
    }

    #[derive(Debug, Clone)]
    struct RemoveD1At00Step;

    impl TechniqueStep for RemoveD1At00Step {
        fn technique_name(&self) -> &'static str {
            "remove-d1-at-00"
        }

        fn clone_box(&self) -> BoxedTechniqueStep {
            Box::new(self.clone())
        }

        fn condition_cells(&self) -> ConditionCells {
            DigitPositions::from_elem(Position::new(0, 0))
        }

        fn condition_digit_cells(&self) -> ConditionDigitCells {
            vec![(
                DigitPositions::from_elem(Position::new(0, 0)),
                DigitSet::from_elem(Digit::D1),
            )]
        }

        fn application(&self) -> Vec<CandidateElimination> {
            vec![CandidateElimination {
                positions: DigitPositions::from_elem(Position::new(0, 0)),
                digits: DigitSet::from_elem(Digit::D1),
            }]
        }
    }

    // Removes D1 from (0, 0) while it is still a candidate.
    #[derive(Debug)]
    struct RemoveD1At00;

    impl Technique for RemoveD1At00 {
        fn name(&self) -> &'static str {
            "remove-d1-at-00"
        }

        fn find_step(
            &self,
            grid: &TechniqueGrid,
        ) -> Result<Option<BoxedTechniqueStep>, SolverError> {
            if grid.candidates_at(Position::new(0, 0)).contains(Digit::D1) {
                Ok(Some(Box::new(RemoveD1At00Step)))
            } else {
                Ok(None)
            }
        }

        fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
            Ok(grid.remove_candidate(Position::new(0, 0), Digit::D1))
        }
    }

    #[derive(Debug)]
    struct InconsistentTechnique;

    impl Technique for InconsistentTechnique {
        fn name(&self) -> &'static str {
            "inconsistent"
        }

        fn find_step(
            &self,
            _grid: &TechniqueGrid,
        ) -> Result<Option<BoxedTechniqueStep>, SolverError> {
            Ok(Some(Box::new(RemoveD1At00Step)))
        }

        fn apply(&self, _grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
            Ok(false)
        }
    }

    #[test]
    fn test_no_change() {
        TechniqueTester::new(TechniqueGrid::new())
            .apply_once(&NoOpTechnique)
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(8, 8));
    }

    #[test]
    fn test_removed_exact() {
        TechniqueTester::new(TechniqueGrid::new())
            .apply_once(&RemoveD1At00)
            .assert_removed_exact(Position::new(0, 0), [Digit::D1])
            .assert_removed_includes(Position::new(0, 0), [Digit::D1])
            .assert_no_change(Position::new(1, 0));
    }

    #[test]
    fn test_apply_until_stuck() {
        TechniqueTester::new(TechniqueGrid::new())
            .apply_until_stuck(&RemoveD1At00)
            .assert_removed_exact(Position::new(0, 0), [Digit::D1]);
    }

    #[test]
    #[should_panic(expected = "Expected inconsistent to report a change")]
    fn test_find_step_consistency_detects_mismatch() {
        TechniqueTester::new(TechniqueGrid::new()).apply_once(&InconsistentTechnique);
    }

    #[test]
    fn test_without_find_step_consistency() {
        TechniqueTester::new(TechniqueGrid::new())
            .without_find_step_consistency()
            .apply_once(&InconsistentTechnique)
            .assert_no_change(Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "Expected exactly")]
    fn test_removed_exact_fails_on_mismatch() {
        TechniqueTester::new(TechniqueGrid::new())
            .apply_once(&RemoveD1At00)
            .assert_removed_exact(Position::new(0, 0), [Digit::D2]);
    }
}
