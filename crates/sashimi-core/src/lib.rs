//! Core board types for complex fish pattern search.
//!
//! This crate provides the value types the solver works with:
//!
//! - [`Digit`] and [`DigitSet`]: digits 1-9 and sets of them
//! - [`Position`] and [`DigitPositions`]: board cells and 81-bit cell sets
//! - [`House`], [`HouseType`], [`HouseTypes`] and [`HouseSet`]: blocks, rows
//!   and columns, indexed 0-26
//! - [`CandidateGrid`]: per-digit candidate planes with consistency checks
//! - [`DigitGrid`]: givens, parsed from the usual 81-character notation
//!
//! All set types are plain bit masks; set algebra is exposed through both
//! named methods and the `|`, `&`, `-` and `!` operators.
//!
//! # Examples
//!
//! ```
//! use sashimi_core::{CandidateGrid, Digit, House, HouseTypes};
//!
//! let grid = CandidateGrid::new();
//! let plane = grid.digit_positions(Digit::D1);
//!
//! let houses = (plane & House::Row { y: 0 }.positions()).houses();
//! assert_eq!(houses.len(), 1 + 3 + 9);
//! assert_eq!(houses.types(), HouseTypes::all());
//! ```

mod bit_set;
pub mod candidate_grid;
pub mod digit;
pub mod digit_grid;
pub mod digit_positions;
pub mod digit_set;
pub mod house;
pub mod house_set;
pub mod position;

pub use self::{
    candidate_grid::{CandidateGrid, ConsistencyError},
    digit::Digit,
    digit_grid::{DigitGrid, DigitGridParseError},
    digit_positions::{DigitPositions, DigitPositionsIter},
    digit_set::{DigitSet, DigitSetIter},
    house::{House, HouseType, HouseTypes},
    house_set::{HouseSet, HouseSetIter},
    position::Position,
};
