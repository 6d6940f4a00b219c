//! Strategy selection and solve entry points

use crate::cholesky;
use crate::elimination::{eliminate_plain, eliminate_pivoted};
use crate::error::SolveError;
use crate::store::MatrixStore;
use crate::substitution::back_substitute;
use crate::traits::Scalar;

/// Tolerance configuration for a solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions<T: Scalar> {
    /// Rejection threshold for near-zero divisors (diagonals during
    /// elimination and substitution, the Cholesky radicand). The pivoted
    /// scan's "is the best available pivot zero" test stays an exact-zero
    /// comparison regardless of this setting.
    pub epsilon: T,
}

impl<T: Scalar> Default for SolveOptions<T> {
    fn default() -> Self {
        Self {
            epsilon: T::divisor_epsilon(),
        }
    }
}

/// Interchangeable solving strategies.
///
/// Selected by the caller; a failed strategy is never retried with another
/// one internally. `PivotedElimination` is the recommended default;
/// `CholeskyFactorization` requires a symmetric positive-definite matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    PlainElimination,
    PivotedElimination,
    CholeskyFactorization,
}

/// Solve the store's system in place with default tolerances.
///
/// On success the solution is readable via
/// [`MatrixStore::ordered_solution`]; the grid and free-member vector are
/// consumed destructively either way.
pub fn solve<T: Scalar>(store: &mut MatrixStore<T>, strategy: Strategy) -> Result<(), SolveError> {
    solve_with(store, strategy, &SolveOptions::default())
}

/// Solve with caller-chosen tolerances.
pub fn solve_with<T: Scalar>(
    store: &mut MatrixStore<T>,
    strategy: Strategy,
    options: &SolveOptions<T>,
) -> Result<(), SolveError> {
    log::debug!("solving order-{} system with {:?}", store.order(), strategy);
    match strategy {
        Strategy::PlainElimination => {
            eliminate_plain(store, options)?;
            back_substitute(&mut store.grid, &mut store.free_members, options)
        }
        Strategy::PivotedElimination => {
            eliminate_pivoted(store, options)?;
            back_substitute(&mut store.grid, &mut store.free_members, options)
        }
        Strategy::CholeskyFactorization => cholesky::solve_in_place(store, options),
    }
}
