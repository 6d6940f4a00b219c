//! Scalar abstraction for the solver routines
//!
//! The solvers are written against a real-number field rather than a fixed
//! float width, so the same elimination and factorization code serves `f64`
//! (the default for teaching-scale systems) and `f32`.

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for scalar types usable as matrix coefficients.
///
/// Requires the four arithmetic operations, magnitude comparison, and a
/// square root (for the Cholesky path). Implemented for `f64` and `f32`.
pub trait Scalar:
    Float + NumAssign + FromPrimitive + Debug + Display + Send + Sync + 'static
{
    /// Magnitude |x|, the quantity maximized by the pivot search.
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    /// Default rejection threshold for near-zero divisors.
    fn divisor_epsilon() -> Self;

    /// Default tolerance for residual checks in verification.
    fn residual_epsilon() -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn divisor_epsilon() -> Self {
        1e-9
    }

    #[inline]
    fn residual_epsilon() -> Self {
        1e-4
    }
}

impl Scalar for f32 {
    #[inline]
    fn divisor_epsilon() -> Self {
        1e-5
    }

    #[inline]
    fn residual_epsilon() -> Self {
        1e-3
    }
}
