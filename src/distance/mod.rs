//! Travel-cost matrices.
//!
//! Provides the dense original cost matrix for TSP instances.

mod matrix;

pub use matrix::CostMatrix;
