//! Error types for problem validation and solver configuration.

use thiserror::Error;

/// Errors reported by the solver before any search is performed.
///
/// The branch-and-bound itself never fails on a well-formed instance: the
/// greedy seed guarantees a finite incumbent, so a complete tour is always
/// returned. Everything here is a precondition violation caught up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The problem has no cities; no tour exists.
    #[error("empty problem: no cities given")]
    EmptyProblem,

    /// An off-diagonal cost is NaN or infinite.
    #[error("cost({from}, {to}) is not finite")]
    NonFiniteCost {
        /// Row index of the offending entry.
        from: usize,
        /// Column index of the offending entry.
        to: usize,
    },

    /// An off-diagonal cost is negative.
    #[error("cost({from}, {to}) = {cost} is negative")]
    NegativeCost {
        /// Row index of the offending entry.
        from: usize,
        /// Column index of the offending entry.
        to: usize,
        /// The offending value.
        cost: f64,
    },

    /// The cost matrix is not symmetric.
    #[error("cost({from}, {to}) != cost({to}, {from}): asymmetric costs")]
    AsymmetricCost {
        /// Row index of the offending pair.
        from: usize,
        /// Column index of the offending pair.
        to: usize,
    },

    /// Solver configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for solver results.
pub type Result<T> = std::result::Result<T, SolveError>;
