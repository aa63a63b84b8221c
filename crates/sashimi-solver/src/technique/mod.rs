//! Pattern-search techniques.
//!
//! Each technique implements the [`Technique`] trait and operates on a
//! [`TechniqueGrid`](crate::TechniqueGrid).

pub use self::{
    complex_fish::{
        ComplexFish, ComplexFishStep, FishKind, FishStep, SearchStats, SiameseFishStep, size_name,
    },
    traits::{BoxedTechnique, Technique},
};

mod complex_fish;
mod traits;

/// Returns all available techniques.
///
/// # Examples
///
/// ```
/// use sashimi_solver::technique::{self, Technique as _};
///
/// let techniques = technique::all_techniques();
/// assert_eq!(techniques[0].name(), "Complex Fish");
/// ```
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![Box::new(ComplexFish::new())]
}

#[cfg(test)]
mod tests {
    use sashimi_core::{CandidateGrid, Digit, House, Position};

    use super::*;
    use crate::{TechniqueGrid, TechniqueStep as _};

    #[test]
    fn test_all_techniques_search_through_trait_objects() {
        let mut candidates = CandidateGrid::new();
        let keep = [(0, 0), (4, 0), (0, 8), (4, 8)].map(|(x, y)| Position::new(x, y));
        for y in [0, 8] {
            for pos in (House::Row { y }).positions() {
                if !keep.contains(&pos) {
                    candidates.remove_candidate(pos, Digit::D5);
                }
            }
        }
        let grid = TechniqueGrid::from(candidates);

        for technique in all_techniques() {
            let Ok(Some(step)) = technique.find_step(&grid) else {
                panic!("{} found nothing", technique.name());
            };
            assert!(!step.application().is_empty());

            let mut applied = grid.clone();
            assert!(matches!(technique.apply(&mut applied), Ok(true)));
            assert!(!applied.candidates_at(Position::new(0, 4)).contains(Digit::D5));
            assert!(matches!(technique.apply(&mut TechniqueGrid::new()), Ok(false)));
        }
    }
}
