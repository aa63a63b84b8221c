//! Complex fish pattern search for Sudoku candidate grids.
//!
//! The crate finds Franken and Mutant fish of size 2 through 7 for every
//! digit, with exo-fins, sashimi detection, cannibalistic eliminations and
//! optional Siamese merging. Searches are pre-filtered by a
//! [`PatternOverlay`] so only candidates that could ever be eliminated are
//! used as anchors.
//!
//! # Examples
//!
//! ```
//! use sashimi_core::{Digit, Position};
//! use sashimi_solver::{TechniqueGrid, technique::{ComplexFish, Technique as _}};
//!
//! let mut grid = TechniqueGrid::new();
//! for y in [0, 8] {
//!     for x in [1, 2, 3, 5, 6, 7, 8] {
//!         grid.remove_candidate(Position::new(x, y), Digit::D5);
//!     }
//! }
//!
//! let changed = ComplexFish::new().apply(&mut grid)?;
//! assert!(changed);
//! assert!(!grid.candidates_at(Position::new(0, 4)).contains(Digit::D5));
//! # Ok::<(), sashimi_solver::SolverError>(())
//! ```

pub use self::{config::*, error::*, pattern_overlay::*, technique_grid::*, technique_step::*};

pub mod combinations;
mod config;
mod error;
mod pattern_overlay;
pub mod technique;
mod technique_grid;
mod technique_step;

#[cfg(test)]
mod testing;
