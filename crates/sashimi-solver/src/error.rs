use derive_more::{Display, Error, From};
use sashimi_core::ConsistencyError;

use crate::ConfigError;

/// Errors returned by technique searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// The candidate grid contains a contradiction.
    #[display("inconsistency detected: {_0}")]
    Inconsistent(#[from] ConsistencyError),
    /// The search configuration is invalid.
    #[display("invalid configuration: {_0}")]
    InvalidConfig(#[from] ConfigError),
}
