//! Direct solvers for dense square linear systems `Ax = b`
//!
//! This crate provides in-place direct solvers for small dense systems,
//! with an independent verification routine.
//!
//! # Features
//!
//! - **Gaussian elimination**: plain, or with full (row + column) pivoting
//!   on the maximum-magnitude element; column swaps are tracked so the
//!   solution comes back in original variable order
//! - **Cholesky factorization**: `L * L^t` path for symmetric
//!   positive-definite systems, solving two triangular systems instead of
//!   a general elimination
//! - **Verification**: residual check of a candidate solution against a
//!   pre-elimination snapshot
//! - **Generic Scalar Types**: works with f64 and f32
//!
//! # Example
//!
//! ```ignore
//! use math_direct_solvers::{solve, MatrixStore, Strategy, check_solution, Scalar};
//!
//! // Augmented rows: the last value of each row is the free member.
//! let mut store = MatrixStore::new(3)?;
//! store.load_from(&rows)?;
//! let snapshot = store.snapshot();
//!
//! solve(&mut store, Strategy::PivotedElimination)?;
//! let x = store.ordered_solution();
//! assert!(check_solution(&snapshot, x.as_slice().unwrap(), f64::residual_epsilon()));
//! ```

pub mod cholesky;
pub mod elimination;
pub mod error;
pub mod store;
pub mod strategy;
pub mod substitution;
pub mod traits;
pub mod verify;

// Re-export main types
pub use error::SolveError;
pub use store::{MatrixStore, Snapshot};
pub use strategy::{solve, solve_with, SolveOptions, Strategy};
pub use traits::Scalar;

// Re-export the component routines for callers composing their own path
pub use cholesky::factor as cholesky_factor;
pub use elimination::{eliminate_pivoted, eliminate_plain};
pub use substitution::{back_substitute, forward_substitute};
pub use verify::check_solution;
