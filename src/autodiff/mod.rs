//! Forward-mode automatic differentiation.
//!
//! Functions that should be differentiated are written once against the
//! [`Scalar`] trait. Evaluated over `f64` they return the plain value;
//! evaluated over [`Dual`] they return the value together with the exact
//! gradient, computed in a single forward pass.

pub mod dual;

use std::ops::{Add, Div, Mul, Neg, Sub};

pub use dual::Dual;

/// Arithmetic needed by the differentiable formulas in this crate.
pub trait Scalar:
    Copy
    + From<f64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Raise to an integer power.
    fn powi(self, n: i32) -> Self;

    /// The primal value, with any derivative information dropped.
    fn value(&self) -> f64;
}

impl Scalar for f64 {
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    fn value(&self) -> f64 {
        *self
    }
}

impl<const N: usize> Scalar for Dual<N> {
    fn powi(self, n: i32) -> Self {
        Dual::powi(self, n)
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// Evaluate `f` at `point` and return its value and gradient.
///
/// Each component of `point` is seeded as an independent input, so
/// `grad[i] = ∂f/∂point[i]`.
///
/// # Example
///
/// ```
/// use ibeam_opt::autodiff::{gradient, Dual};
///
/// // f(x, y) = x²y at (3, 2)
/// let (value, grad) = gradient(|[x, y]: [Dual<2>; 2]| x * x * y, [3.0, 2.0]);
/// assert_eq!(value, 18.0);
/// assert_eq!(grad, [12.0, 9.0]);
/// ```
pub fn gradient<F, const N: usize>(f: F, point: [f64; N]) -> (f64, [f64; N])
where
    F: Fn([Dual<N>; N]) -> Dual<N>,
{
    let result = f(Dual::variables(point));
    (result.value, result.derivs)
}
