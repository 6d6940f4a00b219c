//! Cholesky factorization path for symmetric positive-definite systems
//!
//! Factors `A = L * L^t` with `L` lower triangular, then solves the two
//! triangular systems `L * y = b` and `L^t * x = y` instead of running a
//! general elimination. A non-positive radicand or zero divisor during
//! factorization means the input is not positive definite; this is reported
//! as [`SolveError::NotPositiveDefinite`], kept distinct from
//! [`SolveError::SingularSystem`] even though the numeric symptom is
//! similar.

use crate::error::SolveError;
use crate::store::MatrixStore;
use crate::strategy::SolveOptions;
use crate::substitution::{back_substitute, forward_substitute};
use crate::traits::Scalar;
use ndarray::Array2;

/// Build the lower-triangular Cholesky factor of `grid`.
///
/// - diagonal: `L[s][s] = sqrt(A[s][s] - sum_{j<s} L[s][j]^2)`
/// - below:    `L[i][s] = (A[i][s] - sum_{j<s} L[i][j] * L[s][j]) / L[s][s]`
pub fn factor<T: Scalar>(
    grid: &Array2<T>,
    options: &SolveOptions<T>,
) -> Result<Array2<T>, SolveError> {
    let n = grid.nrows();
    let mut lower = Array2::zeros((n, n));
    for step in 0..n {
        let mut sum = T::zero();
        for j in 0..step {
            sum += lower[[step, j]] * lower[[step, j]];
        }
        let radicand = grid[[step, step]] - sum;
        if radicand <= options.epsilon {
            return Err(SolveError::NotPositiveDefinite { step });
        }
        let diagonal = radicand.sqrt();
        lower[[step, step]] = diagonal;

        for i in step + 1..n {
            let mut sum = T::zero();
            for j in 0..step {
                sum += lower[[i, j]] * lower[[step, j]];
            }
            lower[[i, step]] = (grid[[i, step]] - sum) / diagonal;
        }
    }
    Ok(lower)
}

/// Solve the store's system via Cholesky factorization, writing the
/// solution into its free-member vector.
///
/// The column-identity permutation is never touched (no pivoting happens
/// on this path), so the free-member vector is already in original
/// variable order on return.
pub fn solve_in_place<T: Scalar>(
    store: &mut MatrixStore<T>,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    let n = store.order();
    let mut lower = MatrixStore::new(n)?;
    lower.grid = factor(store.grid(), options)?;
    let mut upper = lower.clone();
    upper.transpose();

    forward_substitute(&mut lower.grid, &mut store.free_members, options)
        .map_err(as_not_positive_definite)?;
    back_substitute(&mut upper.grid, &mut store.free_members, options)
        .map_err(as_not_positive_definite)?;
    Ok(())
}

/// A zero divisor on this path means the factor was degenerate, not that a
/// general elimination hit a zero pivot.
fn as_not_positive_definite(err: SolveError) -> SolveError {
    match err {
        SolveError::SingularSystem { step } => SolveError::NotPositiveDefinite { step },
        other => other,
    }
}
