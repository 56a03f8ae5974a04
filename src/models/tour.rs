//! Tour type.

use crate::distance::CostMatrix;
use serde::{Deserialize, Serialize};

/// An ordered visit sequence through all cities, interpreted as a cycle.
///
/// The representation `[b, a, c]` means `b` is visited first, then `a`,
/// then `c`, and the edge from `c` back to `b` closes the cycle. The cost
/// stored here is the full cycle cost including that closing edge.
///
/// # Examples
///
/// ```
/// use u_tspexact::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1], 12.5);
/// assert_eq!(tour.len(), 3);
/// assert!(tour.is_permutation(3));
/// assert!((tour.cost() - 12.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a visit sequence and its precomputed cycle cost.
    pub fn new(cities: Vec<usize>, cost: f64) -> Self {
        Self { cities, cost }
    }

    /// Creates a tour whose cost is evaluated against the given matrix.
    ///
    /// See [`cost_against`](Self::cost_against) for the evaluation rules.
    pub fn evaluated(cities: Vec<usize>, matrix: &CostMatrix) -> Self {
        let mut tour = Self { cities, cost: 0.0 };
        tour.cost = tour.cost_against(matrix);
        tour
    }

    /// The city indices in visit order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Total cycle cost (closing edge included).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if this tour visits each of `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// Recomputes the true cycle cost of this visit sequence against the
    /// given matrix.
    ///
    /// Sums consecutive edges plus the closing edge from the last city back
    /// to the first. Must be evaluated against the original cost matrix:
    /// a search node's own copy has forbidden entries overwritten with
    /// `+inf` and is unusable for cost evaluation. A tour of fewer than two
    /// cities has no edges and costs zero.
    pub fn cost_against(&self, matrix: &CostMatrix) -> f64 {
        if self.cities.len() < 2 {
            return 0.0;
        }
        let mut cost = 0.0;
        for pair in self.cities.windows(2) {
            cost += matrix.get(pair[0], pair[1]);
        }
        cost + matrix.get(self.cities[self.cities.len() - 1], self.cities[0])
    }
}
