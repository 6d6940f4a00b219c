//! Triangular-system substitution engines
//!
//! Both routines consume a triangular grid and free-member vector in place,
//! leaving the solution values in the vector and the grid reduced to the
//! identity. They are shared by the elimination path (back-substitution
//! after triangularization) and the Cholesky path (forward solve through
//! `L`, back solve through `L^t`).

use crate::error::SolveError;
use crate::strategy::SolveOptions;
use crate::traits::Scalar;
use ndarray::{Array1, Array2};

/// Solve an upper-triangular system from the last row backward.
///
/// For each row `r` (descending), accumulates the already-solved entries
/// `r+1..n`, divides through by the diagonal, and zeroes the consumed
/// off-diagonal entries; on completion the grid is the identity. Returns
/// [`SolveError::SingularSystem`] on a diagonal within epsilon of zero.
pub fn back_substitute<T: Scalar>(
    grid: &mut Array2<T>,
    free_members: &mut Array1<T>,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    let n = free_members.len();
    for row in (0..n).rev() {
        let diagonal = grid[[row, row]];
        if diagonal.magnitude() <= options.epsilon {
            return Err(SolveError::SingularSystem { step: row });
        }
        let mut left = T::zero();
        for column in row + 1..n {
            left += grid[[row, column]] * free_members[column];
            grid[[row, column]] = T::zero();
        }
        grid[[row, row]] = T::one();
        free_members[row] = free_members[row] / diagonal - left / diagonal;
    }
    Ok(())
}

/// Solve a lower-triangular system from the first row forward.
///
/// Mirror image of [`back_substitute`]: rows ascending, consuming columns
/// `0..r`. Required by the Cholesky path's first triangular solve.
pub fn forward_substitute<T: Scalar>(
    grid: &mut Array2<T>,
    free_members: &mut Array1<T>,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    let n = free_members.len();
    for row in 0..n {
        let diagonal = grid[[row, row]];
        if diagonal.magnitude() <= options.epsilon {
            return Err(SolveError::SingularSystem { step: row });
        }
        let mut left = T::zero();
        for column in 0..row {
            left += grid[[row, column]] * free_members[column];
            grid[[row, column]] = T::zero();
        }
        grid[[row, row]] = T::one();
        free_members[row] = free_members[row] / diagonal - left / diagonal;
    }
    Ok(())
}
