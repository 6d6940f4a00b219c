//! Gaussian elimination engines
//!
//! Two in-place reduction strategies over a [`MatrixStore`]:
//!
//! - [`eliminate_plain`]: no pivoting; a zero diagonal at the time of use
//!   means the system is singular.
//! - [`eliminate_pivoted`]: full (row + column) pivoting on the
//!   maximum-magnitude element of the unprocessed submatrix. Column swaps
//!   are recorded in the store's column-identity permutation so the
//!   solution can be read back in original variable order.
//!
//! Pivoting strictly dominates the plain strategy in numerical stability
//! and singularity detection; it is the recommended default.

use crate::error::SolveError;
use crate::store::MatrixStore;
use crate::strategy::SolveOptions;
use crate::traits::Scalar;

/// Reduce the store to upper-triangular form without pivoting.
///
/// For each step `s`, subtracts `grid[r][s] / grid[s][s]` times row `s`
/// from every row `r` below it, applying the same update to the free
/// members. Returns [`SolveError::SingularSystem`] when a diagonal divisor
/// is within epsilon of zero; this is the primary detector of a
/// rank-deficient or inconsistent system and is never recovered internally.
pub fn eliminate_plain<T: Scalar>(
    store: &mut MatrixStore<T>,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    let n = store.order();
    for step in 0..n - 1 {
        eliminate_below(store, step, options)?;
    }
    Ok(())
}

/// Reduce the store to reordered upper-triangular form with full pivoting.
///
/// Before each step `s`, scans rows `s..n`, columns `s..n` in row-major
/// order for the entry of maximum magnitude (first occurrence wins ties),
/// then swaps that entry onto the diagonal: the row swap has no permutation
/// effect, the column swap updates the column-identity permutation. A
/// maximum magnitude of exactly zero means every remaining candidate pivot
/// is zero and the system is singular.
pub fn eliminate_pivoted<T: Scalar>(
    store: &mut MatrixStore<T>,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    let n = store.order();
    for step in 0..n - 1 {
        let (max_row, max_col, max_magnitude) = max_magnitude_position(store, step);
        if max_magnitude == T::zero() {
            return Err(SolveError::SingularSystem { step });
        }
        log::debug!(
            "step {}: pivot {} at ({}, {})",
            step,
            store.grid()[[max_row, max_col]],
            max_row,
            max_col
        );
        store.swap_rows(step, max_row);
        store.swap_columns(step, max_col);
        eliminate_below(store, step, options)?;
    }
    Ok(())
}

/// Row-major scan of the unprocessed submatrix for the largest-magnitude
/// entry. Row-major order is fixed so tie-breaking is reproducible.
fn max_magnitude_position<T: Scalar>(
    store: &MatrixStore<T>,
    step: usize,
) -> (usize, usize, T) {
    let n = store.order();
    let mut max_row = step;
    let mut max_col = step;
    let mut max_magnitude = store.grid()[[step, step]].magnitude();
    for r in step..n {
        for c in step..n {
            let magnitude = store.grid()[[r, c]].magnitude();
            if magnitude > max_magnitude {
                max_row = r;
                max_col = c;
                max_magnitude = magnitude;
            }
        }
    }
    (max_row, max_col, max_magnitude)
}

/// One elimination step: zero out column `step` below the diagonal.
fn eliminate_below<T: Scalar>(
    store: &mut MatrixStore<T>,
    step: usize,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    let n = store.order();
    let pivot = store.grid[[step, step]];
    if pivot.magnitude() <= options.epsilon {
        return Err(SolveError::SingularSystem { step });
    }
    for row in step + 1..n {
        let coefficient = store.grid[[row, step]] / pivot;
        for column in step..n {
            let update = coefficient * store.grid[[step, column]];
            store.grid[[row, column]] -= update;
        }
        let update = coefficient * store.free_members[step];
        store.free_members[row] -= update;
        log::trace!("step {}: row {} reduced with coefficient {}", step, row, coefficient);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn load(rows: &[Vec<f64>]) -> MatrixStore<f64> {
        let mut store = MatrixStore::new(rows.len()).unwrap();
        store.load_from(rows).unwrap();
        store
    }

    #[test]
    fn test_plain_single_step() {
        // [[1,2,4],[3,4,-2]] -> [[1,2,4],[0,-2,-14]] after one step.
        let mut store = load(&[vec![1.0, 2.0, 4.0], vec![3.0, 4.0, -2.0]]);
        eliminate_plain(&mut store, &SolveOptions::default()).unwrap();
        assert_relative_eq!(store.grid()[[0, 0]], 1.0);
        assert_relative_eq!(store.grid()[[0, 1]], 2.0);
        assert_relative_eq!(store.grid()[[1, 0]], 0.0);
        assert_relative_eq!(store.grid()[[1, 1]], -2.0);
        assert_relative_eq!(store.free_members()[0], 4.0);
        assert_relative_eq!(store.free_members()[1], -14.0);
    }

    #[test]
    fn test_pivoted_single_step() {
        // Same system; full pivoting brings the 4 to the diagonal first:
        // [[1,2,4],[3,4,-2]] -> [[4,3,5],[0,-1/2,-2]].
        let mut store = load(&[vec![1.0, 2.0, 4.0], vec![3.0, 4.0, -2.0]]);
        eliminate_pivoted(&mut store, &SolveOptions::default()).unwrap();
        assert_relative_eq!(store.grid()[[0, 0]], 4.0);
        assert_relative_eq!(store.grid()[[0, 1]], 3.0);
        assert_relative_eq!(store.grid()[[1, 0]], 0.0);
        assert_relative_eq!(store.grid()[[1, 1]], -0.5);
        assert_relative_eq!(store.free_members()[0], -2.0);
        assert_relative_eq!(store.free_members()[1], 5.0);
        // The 4 came from column 1, so the permutation flipped.
        assert_eq!(store.column_identity(), &[1, 0]);
    }

    #[test]
    fn test_plain_detects_duplicated_row() {
        let mut store = load(&[
            vec![1.0, -3.0, 2.0, 3.0],
            vec![1.0, -3.0, 2.0, 3.0],
            vec![2.0, -1.0, 1.0, -1.0],
        ]);
        let err = eliminate_plain(&mut store, &SolveOptions::default()).unwrap_err();
        assert!(matches!(err, SolveError::SingularSystem { .. }));
    }

    #[test]
    fn test_pivoted_exact_zero_submatrix_is_singular() {
        // After the first step the remaining submatrix is all zeros.
        let mut store = load(&[
            vec![2.0, 1.0, 1.0, 1.0],
            vec![4.0, 2.0, 2.0, 2.0],
            vec![6.0, 3.0, 3.0, 3.0],
        ]);
        let err = eliminate_pivoted(&mut store, &SolveOptions::default()).unwrap_err();
        assert_eq!(err, SolveError::SingularSystem { step: 1 });
    }

    #[test]
    fn test_pivot_scan_prefers_magnitude_over_sign() {
        let mut store = load(&[vec![1.0, 2.0, 0.0], vec![-5.0, 1.0, 0.0]]);
        let (max_row, max_col, max_magnitude) = max_magnitude_position(&store, 0);
        assert_eq!((max_row, max_col), (1, 0));
        assert_relative_eq!(max_magnitude, 5.0);
        store.swap_rows(0, max_row);
        assert_relative_eq!(store.grid()[[0, 0]], -5.0);
    }

    #[test]
    fn test_pivot_scan_row_major_tie_break() {
        let store = load(&[vec![3.0, -3.0, 0.0], vec![-3.0, 3.0, 0.0]]);
        let (max_row, max_col, _) = max_magnitude_position(&store, 0);
        assert_eq!((max_row, max_col), (0, 0));
    }

    #[test]
    fn test_pivot_scan_ignores_processed_rows_and_columns() {
        let store = load(&[
            vec![9.0, 8.0, 7.0, 0.0],
            vec![6.0, 1.0, 2.0, 0.0],
            vec![5.0, 3.0, 4.0, 0.0],
        ]);
        // At step 1 the scan must ignore row 0 and column 0 entirely.
        let (max_row, max_col, max_magnitude) = max_magnitude_position(&store, 1);
        assert_eq!((max_row, max_col), (2, 2));
        assert_relative_eq!(max_magnitude, 4.0);
    }
}
