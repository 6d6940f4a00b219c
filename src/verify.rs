//! Independent solution verification
//!
//! Substitutes a candidate solution into the original, pre-elimination
//! snapshot and checks every row's residual within a tolerance. The
//! candidate is tried in every permutation, which guards against a caller
//! assuming the wrong variable ordering. That sweep is `O(n!)` and is only
//! acceptable because systems here are teaching-scale (`n <= ~8`); larger
//! orders will take factorially long.

use crate::store::Snapshot;
use crate::traits::Scalar;
use itertools::Itertools;

/// Check a candidate solution (indexed by original variable order) against
/// an unmutated snapshot.
///
/// Returns true if some permutation of the candidate satisfies every row's
/// weighted sum within `tolerance`. Never mutates the snapshot; repeated
/// calls with the same candidate yield the same answer.
pub fn check_solution<T: Scalar>(snapshot: &Snapshot<T>, candidate: &[T], tolerance: T) -> bool {
    let n = snapshot.order();
    if candidate.len() != n {
        return false;
    }
    candidate
        .iter()
        .copied()
        .permutations(n)
        .any(|values| rows_match(snapshot, &values, tolerance))
}

fn rows_match<T: Scalar>(snapshot: &Snapshot<T>, values: &[T], tolerance: T) -> bool {
    let n = snapshot.order();
    for row in 0..n {
        let mut left = T::zero();
        for column in 0..n {
            left += snapshot.grid()[[row, column]] * values[column];
        }
        if (left - snapshot.free_members()[row]).magnitude() >= tolerance {
            return false;
        }
    }
    true
}
