//! Nearest-neighbor constructive heuristic.
//!
//! Builds a complete tour greedily: starting from city 0, always travel to
//! the nearest unvisited city, then close the cycle back to city 0. The
//! result seeds the branch-and-bound incumbent, which needs a finite
//! best-so-far before the first complete tour would otherwise be found.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use crate::distance::CostMatrix;
use crate::models::Tour;

/// Constructs a complete tour using the nearest-neighbor heuristic.
///
/// Starts at city 0 and repeatedly scans all cities in ascending index
/// order, moving to the unvisited one with minimum cost (ties go to the
/// lowest index). The closing edge from the last city back to city 0 is
/// included in the returned cost. A single-city instance yields the tour
/// `[0]` with cost 0; an empty matrix yields an empty tour.
///
/// # Examples
///
/// ```
/// use u_tspexact::models::City;
/// use u_tspexact::distance::CostMatrix;
/// use u_tspexact::constructive::nearest_neighbor_tour;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 2.0, 0.0),
/// ];
/// let matrix = CostMatrix::from_cities(&cities);
/// let tour = nearest_neighbor_tour(&matrix);
/// assert_eq!(tour.cities(), &[0, 1, 2]);
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_tour(matrix: &CostMatrix) -> Tour {
    let n = matrix.size();
    if n == 0 {
        return Tour::new(Vec::new(), 0.0);
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut cities = Vec::with_capacity(n);
    cities.push(0);

    let mut cost = 0.0;
    let mut current = 0;

    while cities.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for j in 0..n {
            if visited[j] {
                continue;
            }
            let d = matrix.get(current, j);
            // Strict < keeps the first (lowest-index) city on ties.
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((j, d));
            }
        }

        let (next, d) = best.expect("unvisited city remains while tour is incomplete");
        visited[next] = true;
        cities.push(next);
        cost += d;
        current = next;
    }

    if n > 1 {
        cost += matrix.get(current, 0);
    }

    Tour::new(cities, cost)
}
