use std::fmt::{self, Display};

use sashimi_core::{HouseSet, HouseTypes};

/// The category a complex fish pattern belongs to.
///
/// A pattern is *mutant-shaped* when its base set or its cover set holds both
/// rows and columns. Mutant fish are exactly the mutant-shaped patterns;
/// everything else is reported as Franken, including plain row/column fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FishKind {
    /// Blocks may appear in base or cover, but neither set mixes rows and columns.
    Franken,
    /// The base or the cover mixes rows and columns.
    Mutant,
}

impl FishKind {
    /// Search passes, in the order they run.
    pub const ALL: [Self; 2] = [Self::Franken, Self::Mutant];

    /// Returns the kind a base/cover pair belongs to.
    #[must_use]
    pub fn of(base: HouseSet, cover: HouseSet) -> Self {
        if is_mutant_shaped(base) || is_mutant_shaped(cover) {
            Self::Mutant
        } else {
            Self::Franken
        }
    }

    /// Returns `true` if this search pass reports the given pattern.
    #[must_use]
    pub fn accepts(self, base: HouseSet, cover: HouseSet) -> bool {
        Self::of(base, cover) == self
    }

    /// Returns `true` if a base set may still lead to a pattern of this kind.
    ///
    /// A Franken pattern never has a base mixing rows and columns.
    #[must_use]
    pub fn admits_base(self, base: HouseSet) -> bool {
        match self {
            Self::Franken => !is_mutant_shaped(base),
            Self::Mutant => true,
        }
    }
}

fn is_mutant_shaped(houses: HouseSet) -> bool {
    houses.types().contains(HouseTypes::LINES)
}

impl Display for FishKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Franken => write!(f, "Franken"),
            Self::Mutant => write!(f, "Mutant"),
        }
    }
}
