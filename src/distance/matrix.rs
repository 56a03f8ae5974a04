//! Dense cost matrix.

use crate::error::SolveError;
use crate::models::City;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// The diagonal is always `+inf`: a city is never its own successor, and
/// the convention keeps self-edges out of every minimum scan. This is the
/// *original* matrix of a problem instance: it is never mutated by the
/// search, which works on its own per-node copies
/// ([`NodeMatrix`](crate::branch_bound::NodeMatrix)). True tour costs are
/// always evaluated against this type.
///
/// # Examples
///
/// ```
/// use u_tspexact::models::City;
/// use u_tspexact::distance::CostMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let matrix = CostMatrix::from_cities(&cities);
/// assert!((matrix.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(matrix.get(1, 1).is_infinite());
/// assert_eq!(matrix.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every entry `+inf`.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![f64::INFINITY; size * size],
            size,
        }
    }

    /// Computes a symmetric Euclidean cost matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut matrix = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                matrix.set(i, j, d);
                matrix.set(j, i, d);
            }
        }
        matrix
    }

    /// Builds a matrix from an opaque cost function.
    ///
    /// `cost(i, j)` is queried for every off-diagonal pair; the diagonal is
    /// forced to `+inf` regardless of what the function returns.
    pub fn from_fn<F>(size: usize, cost: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut matrix = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    matrix.set(i, j, cost(i, j));
                }
            }
        }
        matrix
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Diagonal entries are forced to `+inf`. Returns `None` if the data
    /// length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        let mut matrix = Self { data, size };
        for i in 0..size {
            matrix.set(i, i, f64::INFINITY);
        }
        Some(matrix)
    }

    /// Returns the cost of traveling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost of traveling from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw row-major entries.
    pub(crate) fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks the solver's preconditions on this matrix.
    ///
    /// Every off-diagonal entry must be finite and non-negative, and the
    /// matrix must be symmetric. The first violation found is returned.
    pub fn validate(&self) -> Result<(), SolveError> {
        for i in 0..self.size {
            for j in 0..self.size {
                if i == j {
                    continue;
                }
                let c = self.get(i, j);
                if !c.is_finite() {
                    return Err(SolveError::NonFiniteCost { from: i, to: j });
                }
                if c < 0.0 {
                    return Err(SolveError::NegativeCost {
                        from: i,
                        to: j,
                        cost: c,
                    });
                }
            }
        }
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > 1e-9 {
                    return Err(SolveError::AsymmetricCost { from: i, to: j });
                }
            }
        }
        Ok(())
    }
}
