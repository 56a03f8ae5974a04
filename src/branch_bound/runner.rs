//! Branch-and-bound execution loop.

use super::{expand, BnbConfig, Frontier, SearchState};
use crate::constructive::nearest_neighbor_tour;
use crate::distance::CostMatrix;
use crate::error::{Result, SolveError};
use crate::models::Tour;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The frontier emptied: every state was expanded or pruned, so the
    /// reported tour is a certified optimum.
    Optimal,

    /// The wall-clock budget fired first; the reported tour is the best
    /// found so far.
    TimeLimit,

    /// The external cancellation flag was set; the reported tour is the
    /// best found so far.
    Cancelled,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BnbResult {
    /// The best complete tour found, with its true cycle cost.
    pub best: Tour,

    /// Elapsed wall-clock time at which `best` was discovered.
    pub found_at: Duration,

    /// Total elapsed wall-clock time of the run.
    pub elapsed: Duration,

    /// Whether the result is proven optimal or a budget-limited best.
    pub status: SolveStatus,

    /// Number of states popped and expanded.
    pub nodes_expanded: usize,

    /// Number of states discarded at pop time because the incumbent had
    /// improved past their bound since they were enqueued.
    pub nodes_pruned: usize,
}

impl BnbResult {
    /// Returns `true` if the tour is a certified optimum.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Best complete tour found so far, with its discovery time.
struct Incumbent {
    tour: Tour,
    found_at: Duration,
}

impl Incumbent {
    fn cost(&self) -> f64 {
        self.tour.cost()
    }

    /// Replaces the incumbent on strict improvement only.
    fn improve(&mut self, tour: Tour, found_at: Duration) -> bool {
        if tour.cost() < self.tour.cost() {
            self.tour = tour;
            self.found_at = found_at;
            true
        } else {
            false
        }
    }
}

/// Executes the time-boxed branch-and-bound search.
///
/// The search is best-first over a reduced-cost-matrix lower bound
/// (Little et al., 1963), seeded with a nearest-neighbor incumbent so
/// pruning is effective from the first expansion. Execution is
/// single-threaded and synchronous; the only temporal behavior is the
/// wall-clock deadline (and optional cancellation flag) polled between
/// child examinations.
///
/// # Examples
///
/// ```
/// use u_tspexact::branch_bound::{BnbConfig, BnbSolver};
/// use u_tspexact::distance::CostMatrix;
/// use u_tspexact::models::City;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ];
/// let matrix = CostMatrix::from_cities(&cities);
/// let result = BnbSolver::solve(&matrix, &BnbConfig::default()).unwrap();
/// assert!(result.is_optimal());
/// assert!((result.best.cost() - 4.0).abs() < 1e-10);
/// ```
pub struct BnbSolver;

impl BnbSolver {
    /// Runs the solver to optimality or until the configured time limit.
    pub fn solve(matrix: &CostMatrix, config: &BnbConfig) -> Result<BnbResult> {
        Self::solve_with_cancel(matrix, config, None)
    }

    /// Runs the solver with an optional external cancellation flag.
    ///
    /// The flag is polled at the same points as the deadline and has the
    /// same semantics: stop, keep the current incumbent.
    pub fn solve_with_cancel(
        matrix: &CostMatrix,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult> {
        config.validate().map_err(SolveError::InvalidConfig)?;
        matrix.validate()?;

        let n = matrix.size();
        if n == 0 {
            return Err(SolveError::EmptyProblem);
        }

        let started = Instant::now();

        if n == 1 {
            // The tour is the single city; nothing to search.
            return Ok(BnbResult {
                best: Tour::new(vec![0], 0.0),
                found_at: started.elapsed(),
                elapsed: started.elapsed(),
                status: SolveStatus::Optimal,
                nodes_expanded: 0,
                nodes_pruned: 0,
            });
        }

        let seed = nearest_neighbor_tour(matrix);
        debug!("greedy seed incumbent: cost {}", seed.cost());
        let mut incumbent = Incumbent {
            tour: seed,
            found_at: started.elapsed(),
        };

        let mut frontier = Frontier::new();
        frontier.push(SearchState::root(matrix));

        let mut nodes_expanded = 0usize;
        let mut nodes_pruned = 0usize;
        let mut status = SolveStatus::Optimal;

        'search: loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    status = SolveStatus::Cancelled;
                    break;
                }
            }
            if started.elapsed() >= config.time_limit {
                status = SolveStatus::TimeLimit;
                break;
            }

            let Some(state) = frontier.pop() else {
                // Frontier exhausted: the incumbent is a certified optimum.
                break;
            };

            // A state enqueued before an incumbent improvement may be
            // dominated by the time it surfaces; re-check at pop time.
            if state.bound() >= incumbent.cost() {
                nodes_pruned += 1;
                continue;
            }

            nodes_expanded += 1;
            for child in expand(&state, incumbent.cost()) {
                if child.is_complete() {
                    // True cost comes from the original matrix; the child's
                    // own copy is full of forbidden entries.
                    let tour = Tour::evaluated(child.settled().to_vec(), matrix);
                    if incumbent.improve(tour, started.elapsed()) {
                        debug!(
                            "incumbent improved: cost {} at {:?}",
                            incumbent.cost(),
                            incumbent.found_at
                        );
                    }
                } else {
                    frontier.push(child);
                }

                if started.elapsed() >= config.time_limit {
                    status = SolveStatus::TimeLimit;
                    break 'search;
                }
            }
        }

        debug!(
            "search ended: {:?}, {} expanded, {} pruned at pop, frontier {}",
            status,
            nodes_expanded,
            nodes_pruned,
            frontier.len()
        );

        Ok(BnbResult {
            best: incumbent.tour,
            found_at: incumbent.found_at,
            elapsed: started.elapsed(),
            status,
            nodes_expanded,
            nodes_pruned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn unit_square() -> CostMatrix {
        CostMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 0.0, 1.0),
        ])
    }

    /// Exhaustive optimum over all tours fixing city 0 first.
    fn brute_force_optimum(matrix: &CostMatrix) -> f64 {
        fn permute(rest: &mut Vec<usize>, prefix: &mut Vec<usize>, matrix: &CostMatrix, best: &mut f64) {
            if rest.is_empty() {
                let cost = Tour::new(prefix.clone(), 0.0).cost_against(matrix);
                if cost < *best {
                    *best = cost;
                }
                return;
            }
            for k in 0..rest.len() {
                let city = rest.remove(k);
                prefix.push(city);
                permute(rest, prefix, matrix, best);
                prefix.pop();
                rest.insert(k, city);
            }
        }

        let n = matrix.size();
        let mut best = f64::INFINITY;
        let mut rest: Vec<usize> = (1..n).collect();
        permute(&mut rest, &mut vec![0], matrix, &mut best);
        best
    }

    fn random_matrix(seed: u64, n: usize) -> CostMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let cities: Vec<City> = (0..n)
            .map(|i| City::new(i, rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();
        CostMatrix::from_cities(&cities)
    }

    #[test]
    fn test_incumbent_improves_strictly() {
        let mut incumbent = Incumbent {
            tour: Tour::new(vec![0, 1], 10.0),
            found_at: Duration::ZERO,
        };
        assert!(!incumbent.improve(Tour::new(vec![1, 0], 10.0), Duration::from_secs(1)));
        assert_eq!(incumbent.found_at, Duration::ZERO);
        assert!(!incumbent.improve(Tour::new(vec![1, 0], 11.0), Duration::from_secs(1)));
        assert!(incumbent.improve(Tour::new(vec![1, 0], 9.0), Duration::from_secs(2)));
        assert_eq!(incumbent.cost(), 9.0);
        assert_eq!(incumbent.found_at, Duration::from_secs(2));
    }

    #[test]
    fn test_unit_square_optimal() {
        let result = BnbSolver::solve(&unit_square(), &BnbConfig::default()).expect("solves");
        assert_eq!(result.status, SolveStatus::Optimal);
        assert!(result.best.is_permutation(4));
        assert!((result.best.cost() - 4.0).abs() < 1e-10);
        assert!(result.found_at <= result.elapsed);
    }

    #[test]
    fn test_empty_problem() {
        let result = BnbSolver::solve(&CostMatrix::new(0), &BnbConfig::default());
        assert!(matches!(result, Err(SolveError::EmptyProblem)));
    }

    #[test]
    fn test_single_city() {
        let matrix = CostMatrix::from_cities(&[City::new(0, 2.0, 3.0)]);
        let result = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
        assert_eq!(result.best.cities(), &[0]);
        assert_eq!(result.best.cost(), 0.0);
        assert!(result.is_optimal());
    }

    #[test]
    fn test_two_cities_there_and_back() {
        let matrix = CostMatrix::from_fn(2, |_, _| 5.0);
        let result = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
        assert!((result.best.cost() - 10.0).abs() < 1e-10);
        assert!(result.best.is_permutation(2));
        assert!(result.is_optimal());
    }

    #[test]
    fn test_invalid_config() {
        let config = BnbConfig::default().with_time_limit(Duration::ZERO);
        let result = BnbSolver::solve(&unit_square(), &config);
        assert!(matches!(result, Err(SolveError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_costs() {
        let mut matrix = unit_square();
        matrix.set(0, 1, -2.0);
        matrix.set(1, 0, -2.0);
        assert!(matches!(
            BnbSolver::solve(&matrix, &BnbConfig::default()),
            Err(SolveError::NegativeCost { .. })
        ));
    }

    #[test]
    fn test_matches_brute_force_on_small_instances() {
        for seed in 0..8 {
            for n in 4..=7 {
                let matrix = random_matrix(seed, n);
                let result = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
                assert!(result.is_optimal(), "seed {seed} n {n} hit the time limit");
                let exact = brute_force_optimum(&matrix);
                assert!(
                    (result.best.cost() - exact).abs() < 1e-9,
                    "seed {seed} n {n}: got {}, brute force {exact}",
                    result.best.cost()
                );
            }
        }
    }

    #[test]
    fn test_never_worse_than_greedy_seed() {
        for seed in 0..8 {
            let matrix = random_matrix(seed, 8);
            let greedy = nearest_neighbor_tour(&matrix);
            let result = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
            assert!(result.best.cost() <= greedy.cost() + 1e-12);
            assert!(result.best.is_permutation(8));
        }
    }

    #[test]
    fn test_deterministic_optimal_cost() {
        let matrix = random_matrix(42, 7);
        let a = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
        let b = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
        assert_eq!(a.best.cost(), b.best.cost());
        assert_eq!(a.status, b.status);
    }

    #[test]
    fn test_reported_cost_matches_reported_tour() {
        let matrix = random_matrix(7, 6);
        let result = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
        let recomputed = result.best.cost_against(&matrix);
        assert!((result.best.cost() - recomputed).abs() < 1e-9);
    }

    #[test]
    fn test_cancellation_returns_incumbent() {
        let matrix = random_matrix(3, 12);
        let flag = Arc::new(AtomicBool::new(true));
        let result =
            BnbSolver::solve_with_cancel(&matrix, &BnbConfig::default(), Some(flag)).expect("solves");
        assert_eq!(result.status, SolveStatus::Cancelled);
        // The greedy seed is always available as the answer.
        assert!(result.best.is_permutation(12));
        assert!(result.best.cost().is_finite());
    }

    #[test]
    fn test_tiny_time_limit_keeps_seed() {
        let matrix = random_matrix(9, 13);
        let config = BnbConfig::default().with_time_limit(Duration::from_nanos(1));
        let result = BnbSolver::solve(&matrix, &config).expect("solves");
        assert_eq!(result.status, SolveStatus::TimeLimit);
        assert!(result.best.is_permutation(13));
        assert!(result.best.cost().is_finite());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_optimum_at_most_greedy_and_at_least_root_bound(seed in 0u64..500) {
            let matrix = random_matrix(seed, 6);
            let root_bound = SearchState::root(&matrix).bound();
            let result = BnbSolver::solve(&matrix, &BnbConfig::default()).expect("solves");
            prop_assert!(result.is_optimal());
            prop_assert!(result.best.cost() <= nearest_neighbor_tour(&matrix).cost() + 1e-12);
            prop_assert!(result.best.cost() >= root_bound - 1e-9);
        }
    }
}
