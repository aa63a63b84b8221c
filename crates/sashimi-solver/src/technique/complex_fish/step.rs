use std::fmt::{self, Display};

use derive_more::{From, IsVariant};
use sashimi_core::{Digit, DigitPositions, DigitSet, HouseSet};

use super::{FishKind, fins::FinAnalysis};
use crate::{
    BoxedTechniqueStep, CandidateElimination, ConditionCells, ConditionDigitCells, TechniqueStep,
};

const FRANKEN_NAME: &str = "Franken Fish";
const MUTANT_NAME: &str = "Mutant Fish";
const SIAMESE_FRANKEN_NAME: &str = "Siamese Franken Fish";
const SIAMESE_MUTANT_NAME: &str = "Siamese Mutant Fish";

/// Returns the conventional name of a fish of the given size.
#[must_use]
pub fn size_name(size: usize) -> &'static str {
    match size {
        2 => "X-Wing",
        3 => "Swordfish",
        4 => "Jellyfish",
        5 => "Squirmbag",
        6 => "Whale",
        7 => "Leviathan",
        _ => "Fish",
    }
}

/// A single complex fish found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexFishStep {
    digit: Digit,
    base: HouseSet,
    cover: HouseSet,
    kind: FishKind,
    base_candidates: DigitPositions,
    exofins: DigitPositions,
    endofins: DigitPositions,
    sashimi: Option<bool>,
    cannibals: DigitPositions,
    eliminations: DigitPositions,
}

impl ComplexFishStep {
    pub(crate) fn new(digit: Digit, base: HouseSet, cover: HouseSet, analysis: &FinAnalysis) -> Self {
        Self {
            digit,
            base,
            cover,
            kind: FishKind::of(base, cover),
            base_candidates: analysis.base_candidates,
            exofins: analysis.exofins,
            endofins: analysis.endofins,
            sashimi: analysis.sashimi(base),
            cannibals: analysis.cannibals,
            eliminations: analysis.eliminations,
        }
    }

    /// Returns the fish digit.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns the base houses.
    #[must_use]
    pub fn base(&self) -> HouseSet {
        self.base
    }

    /// Returns the cover houses.
    #[must_use]
    pub fn cover(&self) -> HouseSet {
        self.cover
    }

    /// Returns the number of base (and cover) houses.
    #[must_use]
    pub fn size(&self) -> usize {
        self.base.len()
    }

    /// Returns the pattern category.
    #[must_use]
    pub fn kind(&self) -> FishKind {
        self.kind
    }

    /// Returns `true` for Franken fish, `false` for Mutant fish.
    #[must_use]
    pub fn is_franken(&self) -> bool {
        self.kind == FishKind::Franken
    }

    /// Returns the candidates of the digit inside the base houses.
    #[must_use]
    pub fn base_candidates(&self) -> DigitPositions {
        self.base_candidates
    }

    /// Returns base candidates outside every cover house.
    #[must_use]
    pub fn exofins(&self) -> DigitPositions {
        self.exofins
    }

    /// Returns base candidates shared by two base houses.
    ///
    /// Always empty for fish reported by the search.
    #[must_use]
    pub fn endofins(&self) -> DigitPositions {
        self.endofins
    }

    /// Returns all fins.
    #[must_use]
    pub fn fins(&self) -> DigitPositions {
        self.exofins | self.endofins
    }

    /// Returns `None` for fin-less fish, otherwise whether the fish is sashimi.
    #[must_use]
    pub fn sashimi(&self) -> Option<bool> {
        self.sashimi
    }

    /// Returns base cells eliminated because they lie in two cover houses.
    #[must_use]
    pub fn cannibals(&self) -> DigitPositions {
        self.cannibals
    }

    /// Returns `true` if some base cell eliminates itself.
    #[must_use]
    pub fn is_cannibalistic(&self) -> bool {
        !self.cannibals.is_empty()
    }

    /// Returns the candidates removed by this fish.
    #[must_use]
    pub fn eliminations(&self) -> DigitPositions {
        self.eliminations
    }
}

impl Display for ComplexFishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sashimi {
            Some(true) => write!(f, "Sashimi ")?,
            Some(false) => write!(f, "Finned ")?,
            None if self.is_cannibalistic() => write!(f, "Cannibalistic ")?,
            None => {}
        }
        write!(f, "{} {}", self.kind, size_name(self.size()))
    }
}

/// Several complex fish sharing a digit and base houses, reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiameseFishStep {
    digit: Digit,
    base: HouseSet,
    members: Vec<ComplexFishStep>,
}

impl SiameseFishStep {
    /// Builds a merged step.
    ///
    /// # Panics
    ///
    /// Panics if `members` is empty or its members differ in digit or base.
    pub(crate) fn new(members: Vec<ComplexFishStep>) -> Self {
        assert!(!members.is_empty(), "a Siamese fish needs at least one member");
        let (digit, base) = (members[0].digit, members[0].base);
        assert!(
            members.iter().all(|m| m.digit == digit && m.base == base),
            "Siamese members must share digit and base"
        );
        Self {
            digit,
            base,
            members,
        }
    }

    /// Returns the merged fish, in discovery order.
    #[must_use]
    pub fn members(&self) -> &[ComplexFishStep] {
        &self.members
    }

    fn union(&self, f: impl Fn(&ComplexFishStep) -> DigitPositions) -> DigitPositions {
        self.members
            .iter()
            .fold(DigitPositions::EMPTY, |acc, member| acc | f(member))
    }

    /// Returns the shared digit.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns the shared base houses.
    #[must_use]
    pub fn base(&self) -> HouseSet {
        self.base
    }

    /// Returns the union of the member cover houses.
    #[must_use]
    pub fn cover(&self) -> HouseSet {
        self.members
            .iter()
            .fold(HouseSet::EMPTY, |acc, member| acc | member.cover)
    }

    /// Returns the number of base houses.
    #[must_use]
    pub fn size(&self) -> usize {
        self.base().len()
    }

    /// Returns `Mutant` if any member is a Mutant fish.
    #[must_use]
    pub fn kind(&self) -> FishKind {
        if self.members.iter().any(|m| m.kind == FishKind::Mutant) {
            FishKind::Mutant
        } else {
            FishKind::Franken
        }
    }

    /// Returns `true` if every member is a Franken fish.
    #[must_use]
    pub fn is_franken(&self) -> bool {
        self.kind() == FishKind::Franken
    }

    /// Returns the union of the member fins.
    #[must_use]
    pub fn fins(&self) -> DigitPositions {
        self.union(ComplexFishStep::fins)
    }

    /// Returns the union of the member eliminations.
    #[must_use]
    pub fn eliminations(&self) -> DigitPositions {
        self.union(ComplexFishStep::eliminations)
    }
}

impl Display for SiameseFishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Siamese {} {}", self.kind(), size_name(self.size()))
    }
}

/// A result of the complex fish search.
#[derive(Debug, Clone, PartialEq, Eq, From, IsVariant)]
pub enum FishStep {
    /// A single fish.
    Complex(ComplexFishStep),
    /// Fish sharing base houses, merged.
    Siamese(SiameseFishStep),
}

impl FishStep {
    /// Returns the fish digit.
    #[must_use]
    pub fn digit(&self) -> Digit {
        match self {
            Self::Complex(step) => step.digit(),
            Self::Siamese(step) => step.digit(),
        }
    }

    /// Returns the base houses.
    #[must_use]
    pub fn base(&self) -> HouseSet {
        match self {
            Self::Complex(step) => step.base(),
            Self::Siamese(step) => step.base(),
        }
    }

    /// Returns the cover houses (their union for Siamese fish).
    #[must_use]
    pub fn cover(&self) -> HouseSet {
        match self {
            Self::Complex(step) => step.cover(),
            Self::Siamese(step) => step.cover(),
        }
    }

    /// Returns the fins (their union for Siamese fish).
    #[must_use]
    pub fn fins(&self) -> DigitPositions {
        match self {
            Self::Complex(step) => step.fins(),
            Self::Siamese(step) => step.fins(),
        }
    }

    /// Returns `true` for Franken fish.
    #[must_use]
    pub fn is_franken(&self) -> bool {
        match self {
            Self::Complex(step) => step.is_franken(),
            Self::Siamese(step) => step.is_franken(),
        }
    }

    /// Returns the candidates removed by this result.
    #[must_use]
    pub fn eliminations(&self) -> DigitPositions {
        match self {
            Self::Complex(step) => step.eliminations(),
            Self::Siamese(step) => step.eliminations(),
        }
    }

    fn base_candidates(&self) -> DigitPositions {
        match self {
            Self::Complex(step) => step.base_candidates(),
            Self::Siamese(step) => step.union(ComplexFishStep::base_candidates),
        }
    }
}

impl Display for FishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complex(step) => Display::fmt(step, f),
            Self::Siamese(step) => Display::fmt(step, f),
        }
    }
}

impl TechniqueStep for FishStep {
    fn technique_name(&self) -> &'static str {
        match (self.is_siamese(), self.is_franken()) {
            (false, true) => FRANKEN_NAME,
            (false, false) => MUTANT_NAME,
            (true, true) => SIAMESE_FRANKEN_NAME,
            (true, false) => SIAMESE_MUTANT_NAME,
        }
    }

    fn clone_box(&self) -> BoxedTechniqueStep {
        Box::new(self.clone())
    }

    fn condition_cells(&self) -> ConditionCells {
        self.base_candidates()
    }

    fn condition_digit_cells(&self) -> ConditionDigitCells {
        let digits = DigitSet::from_elem(self.digit());
        let mut cells = vec![(self.base_candidates(), digits)];
        let fins = self.fins();
        if !fins.is_empty() {
            cells.push((fins, digits));
        }
        cells
    }

    fn application(&self) -> Vec<CandidateElimination> {
        vec![CandidateElimination {
            positions: self.eliminations(),
            digits: DigitSet::from_elem(self.digit()),
        }]
    }
}
