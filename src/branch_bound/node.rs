//! Search node representation: per-node matrix copy and state.

use crate::distance::CostMatrix;

/// A search node's private, mutable copy of the cost matrix.
///
/// Structurally distinct from [`CostMatrix`] so the two can never be
/// confused: entries here are progressively overwritten with `+inf` as
/// cities are fixed, which makes the copy useless for true cost
/// evaluation. Each node owns its copy exclusively; siblings share
/// nothing.
#[derive(Debug, Clone)]
pub struct NodeMatrix {
    data: Vec<f64>,
    size: usize,
}

impl NodeMatrix {
    /// Clones the original matrix into a node-owned copy.
    pub fn from_original(matrix: &CostMatrix) -> Self {
        Self {
            data: matrix.data().to_vec(),
            size: matrix.size(),
        }
    }

    /// Returns the (possibly reduced or forbidden) entry at `(from, to)`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Overwrites every entry in `row` with `+inf`.
    pub fn forbid_row(&mut self, row: usize) {
        for j in 0..self.size {
            self.data[row * self.size + j] = f64::INFINITY;
        }
    }

    /// Overwrites every entry in `col` with `+inf`.
    pub fn forbid_col(&mut self, col: usize) {
        for i in 0..self.size {
            self.data[i * self.size + col] = f64::INFINITY;
        }
    }

    /// Row/column-normalizes the matrix in place.
    ///
    /// Subtracts each row's minimum from the row, then each column's
    /// minimum from the already row-reduced column, and returns the sum of
    /// the subtracted minima: a valid additive lower-bound contribution
    /// for any tour still expressible in this matrix. A row or column
    /// whose minimum is `+inf` has no feasible entries left (its city has
    /// already departed or been entered) and is skipped: an infinite
    /// minimum must never leak into a bound.
    pub fn reduce(&mut self) -> f64 {
        let mut total = 0.0;

        for i in 0..self.size {
            let mut min = f64::INFINITY;
            for j in 0..self.size {
                min = min.min(self.data[i * self.size + j]);
            }
            if min.is_finite() && min > 0.0 {
                for j in 0..self.size {
                    self.data[i * self.size + j] -= min;
                }
                total += min;
            }
        }

        for j in 0..self.size {
            let mut min = f64::INFINITY;
            for i in 0..self.size {
                min = min.min(self.data[i * self.size + j]);
            }
            if min.is_finite() && min > 0.0 {
                for i in 0..self.size {
                    self.data[i * self.size + j] -= min;
                }
                total += min;
            }
        }

        total
    }
}

/// A node in the branch-and-bound search tree.
///
/// Holds the settled tour prefix, a lower bound on the cost of any
/// completion consistent with it, and the node's own reduced matrix copy.
/// States are immutable once created: children clone the parent's matrix
/// rather than mutating it.
#[derive(Debug, Clone)]
pub struct SearchState {
    bound: f64,
    settled: Vec<usize>,
    matrix: NodeMatrix,
}

impl SearchState {
    /// Builds the root state: empty prefix, reduced matrix, reduction
    /// total as the root lower bound.
    pub fn root(matrix: &CostMatrix) -> Self {
        let mut node_matrix = NodeMatrix::from_original(matrix);
        let bound = node_matrix.reduce();
        Self {
            bound,
            settled: Vec::new(),
            matrix: node_matrix,
        }
    }

    pub(crate) fn new(bound: f64, settled: Vec<usize>, matrix: NodeMatrix) -> Self {
        Self {
            bound,
            settled,
            matrix,
        }
    }

    /// Lower bound on the cost of any completion of this prefix.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// The settled tour prefix, in visit order.
    pub fn settled(&self) -> &[usize] {
        &self.settled
    }

    /// The most recently settled city, absent only for the root.
    pub fn last_settled(&self) -> Option<usize> {
        self.settled.last().copied()
    }

    /// Returns `true` if `city` is already part of the prefix.
    pub fn contains(&self, city: usize) -> bool {
        self.settled.contains(&city)
    }

    /// Returns `true` if every city has been settled.
    ///
    /// The prefix is duplicate-free by construction, so length alone
    /// decides completeness.
    pub fn is_complete(&self) -> bool {
        self.settled.len() == self.matrix.size()
    }

    pub(crate) fn matrix(&self) -> &NodeMatrix {
        &self.matrix
    }
}
