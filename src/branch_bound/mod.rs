//! Time-boxed branch-and-bound TSP search.
//!
//! Best-first search over partial tours with reduced-cost-matrix lower
//! bounds (Little et al., 1963). A nearest-neighbor tour seeds the
//! incumbent so pruning works from the first expansion; the frontier is a
//! global min-priority queue over bounds; the wall-clock deadline is
//! polled between child examinations.
//!
//! - [`BnbSolver`] — execution loop, deadline/cancellation handling
//! - [`BnbConfig`] — time budget configuration
//! - [`BnbResult`] / [`SolveStatus`] — outcome, discovery time, statistics
//! - [`SearchState`] / [`NodeMatrix`] — immutable search nodes with
//!   per-node matrix copies
//! - [`Frontier`] — pending states in best-first order
//! - [`expand`] — child generation with strict-improvement pruning

mod config;
mod expand;
mod frontier;
mod node;
mod runner;

pub use config::BnbConfig;
pub use expand::expand;
pub use frontier::Frontier;
pub use node::{NodeMatrix, SearchState};
pub use runner::{BnbResult, BnbSolver, SolveStatus};
