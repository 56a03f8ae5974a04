//! # u-tspexact
//!
//! Exact traveling-salesman solving: a time-boxed branch-and-bound with
//! reduced-cost-matrix lower bounds, seeded by a greedy nearest-neighbor
//! tour. Runs to a certified optimum when the search space is exhausted
//! within the wall-clock budget, and otherwise reports the best tour
//! found so far (anytime behavior).
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, Tour)
//! - [`distance`] — Original cost matrix with infinite self-distances
//! - [`constructive`] — Greedy nearest-neighbor seeding
//! - [`branch_bound`] — The exact search: states, bounds, frontier, runner
//! - [`error`] — Precondition and configuration errors
//!
//! ## Example
//!
//! ```
//! use u_tspexact::branch_bound::{BnbConfig, BnbSolver};
//! use u_tspexact::distance::CostMatrix;
//! use u_tspexact::models::City;
//!
//! let cities = vec![
//!     City::new(0, 0.0, 0.0),
//!     City::new(1, 1.0, 0.0),
//!     City::new(2, 1.0, 1.0),
//!     City::new(3, 0.0, 1.0),
//! ];
//! let matrix = CostMatrix::from_cities(&cities);
//! let result = BnbSolver::solve(&matrix, &BnbConfig::default()).unwrap();
//!
//! assert!(result.is_optimal());
//! assert!((result.best.cost() - 4.0).abs() < 1e-10);
//! ```

pub mod branch_bound;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
