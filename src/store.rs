//! Matrix store: the mutable state of one solving session
//!
//! Owns the `n x n` coefficient grid, the free-member vector, and the
//! column-identity permutation that remembers which original unknown each
//! column represents after pivoting has swapped columns around.

use crate::error::SolveError;
use crate::traits::Scalar;
use ndarray::{Array1, Array2};

/// Immutable copy of a system taken before solving.
///
/// Produced by [`MatrixStore::snapshot`] and consumed by the verifier;
/// solving never touches it, so residual checks always run against the
/// original coefficients.
#[derive(Debug, Clone)]
pub struct Snapshot<T: Scalar> {
    grid: Array2<T>,
    free_members: Array1<T>,
}

impl<T: Scalar> Snapshot<T> {
    /// System order.
    pub fn order(&self) -> usize {
        self.free_members.len()
    }

    /// The coefficient grid as captured at snapshot time.
    pub fn grid(&self) -> &Array2<T> {
        &self.grid
    }

    /// The free-member vector as captured at snapshot time.
    pub fn free_members(&self) -> &Array1<T> {
        &self.free_members
    }
}

/// Mutable store for one dense square system `Ax = b`.
///
/// The grid and free-member vector are mutated in place by the elimination
/// and substitution engines. Column swaps are tracked in the
/// column-identity permutation so [`ordered_solution`](Self::ordered_solution)
/// can hand the values back in original variable order.
#[derive(Debug, Clone)]
pub struct MatrixStore<T: Scalar> {
    n: usize,
    pub(crate) grid: Array2<T>,
    pub(crate) free_members: Array1<T>,
    /// Maps current column position -> original variable index.
    column_identity: Vec<usize>,
}

impl<T: Scalar> MatrixStore<T> {
    /// Create a store for a system of the given order, zero-filled.
    ///
    /// Orders below 2 are rejected with [`SolveError::InvalidOrder`].
    pub fn new(n: usize) -> Result<Self, SolveError> {
        if n < 2 {
            return Err(SolveError::InvalidOrder { got: n });
        }
        Ok(Self {
            n,
            grid: Array2::zeros((n, n)),
            free_members: Array1::zeros(n),
            column_identity: (0..n).collect(),
        })
    }

    /// Reset to a fresh zero system of a (possibly different) order.
    ///
    /// Any computation in progress is discarded: the grid, the free-member
    /// vector, and the column-identity permutation all start over.
    pub fn set_order(&mut self, n: usize) -> Result<(), SolveError> {
        if n < 2 {
            return Err(SolveError::InvalidOrder { got: n });
        }
        self.n = n;
        self.grid = Array2::zeros((n, n));
        self.free_members = Array1::zeros(n);
        self.column_identity = (0..n).collect();
        Ok(())
    }

    /// System order.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Bulk-populate from `n` augmented rows of `n + 1` values each; the
    /// last value of each row is the free member.
    pub fn load_from(&mut self, rows: &[Vec<T>]) -> Result<(), SolveError> {
        if rows.len() != self.n {
            return Err(SolveError::DimensionMismatch {
                expected: self.n,
                got: rows.len(),
            });
        }
        for row in rows {
            if row.len() != self.n + 1 {
                return Err(SolveError::DimensionMismatch {
                    expected: self.n + 1,
                    got: row.len(),
                });
            }
        }
        for (r, row) in rows.iter().enumerate() {
            for c in 0..self.n {
                self.grid[[r, c]] = row[c];
            }
            self.free_members[r] = row[self.n];
        }
        Ok(())
    }

    /// The coefficient grid.
    pub fn grid(&self) -> &Array2<T> {
        &self.grid
    }

    /// The free-member vector (holds raw solution values post-solve, in
    /// current column order).
    pub fn free_members(&self) -> &Array1<T> {
        &self.free_members
    }

    /// The column-identity permutation: current position -> original index.
    pub fn column_identity(&self) -> &[usize] {
        &self.column_identity
    }

    /// Exchange grid rows `i`, `j` and the matching free-member entries.
    ///
    /// Rows are equations, not variables, so the column-identity
    /// permutation is untouched.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for c in 0..self.n {
            self.grid.swap([i, c], [j, c]);
        }
        self.free_members.swap(i, j);
    }

    /// Exchange grid columns `i`, `j` and the two corresponding entries of
    /// the column-identity permutation.
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for r in 0..self.n {
            self.grid.swap([r, i], [r, j]);
        }
        self.column_identity.swap(i, j);
    }

    /// Replace the grid with its transpose.
    ///
    /// Structural helper (the Cholesky path uses it to build `L^t`); the
    /// free-member vector and the permutation are untouched.
    pub fn transpose(&mut self) {
        self.grid = self.grid.t().to_owned();
    }

    /// Take an immutable deep copy of the current grid and free members.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            grid: self.grid.clone(),
            free_members: self.free_members.clone(),
        }
    }

    /// Solution values mapped back to original variable order.
    ///
    /// Inverts the column-identity permutation at read time:
    /// `ordered[identity[j]] = free_members[j]`. Pure with respect to the
    /// store; only meaningful once a solve has completed.
    pub fn ordered_solution(&self) -> Array1<T> {
        let mut ordered = Array1::zeros(self.n);
        for (current, &original) in self.column_identity.iter().enumerate() {
            ordered[original] = self.free_members[current];
        }
        ordered
    }
}

impl<T: Scalar> std::fmt::Display for MatrixStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.n {
            write!(f, "(")?;
            for c in 0..self.n {
                write!(f, "{:10.2}", self.grid[[r, c]])?;
            }
            writeln!(f, " |{:10.2})", self.free_members[r])?;
        }
        Ok(())
    }
}
