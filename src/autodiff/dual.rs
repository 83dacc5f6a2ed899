//! Multi-component dual numbers.
//!
//! `Dual<N>` carries a value together with its partial derivatives with
//! respect to `N` independent inputs. Every arithmetic operation applies the
//! corresponding differentiation rule to all `N` components at once, so a
//! single evaluation of a function yields its full gradient.
//!
//! - `(a, ∇a) + (b, ∇b) = (a + b, ∇a + ∇b)`
//! - `(a, ∇a) * (b, ∇b) = (ab, b∇a + a∇b)`
//! - `(a, ∇a) / (b, ∇b) = (a/b, (b∇a - a∇b) / b²)`
//! - `(a, ∇a)ⁿ = (aⁿ, n·aⁿ⁻¹·∇a)`

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value and its partial derivatives with respect to `N` inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<const N: usize> {
    /// The primal value
    pub value: f64,
    /// The partial derivatives `[∂f/∂x₁, ..., ∂f/∂xₙ]`
    pub derivs: [f64; N],
}

impl<const N: usize> Dual<N> {
    pub fn new(value: f64, derivs: [f64; N]) -> Self {
        Self { value, derivs }
    }

    /// A constant: every partial derivative is zero.
    pub fn constant(value: f64) -> Self {
        Self {
            value,
            derivs: [0.0; N],
        }
    }

    /// The `index`-th input, seeded with a unit derivative along its own axis.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn variable(value: f64, index: usize) -> Self {
        assert!(
            index < N,
            "Variable index {} out of bounds for N={}",
            index,
            N
        );
        let mut derivs = [0.0; N];
        derivs[index] = 1.0;
        Self { value, derivs }
    }

    /// Seed every component of `point` as an independent input.
    pub fn variables(point: [f64; N]) -> [Self; N] {
        let mut vars = [Self::constant(0.0); N];
        for (i, (var, value)) in vars.iter_mut().zip(point).enumerate() {
            *var = Self::variable(value, i);
        }
        vars
    }

    /// Integer power, `n·aⁿ⁻¹·∇a` for the derivative.
    pub fn powi(self, n: i32) -> Self {
        let scale = if n == 0 {
            0.0
        } else {
            n as f64 * self.value.powi(n - 1)
        };
        Self {
            value: self.value.powi(n),
            derivs: self.derivs.map(|d| scale * d),
        }
    }

    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> [f64; N] {
        let mut out = [0.0; N];
        for (o, (a, b)) in out.iter_mut().zip(self.derivs.iter().zip(rhs.derivs.iter())) {
            *o = f(*a, *b);
        }
        out
    }
}

impl<const N: usize> From<f64> for Dual<N> {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl<const N: usize> Add for Dual<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            derivs: self.zip_with(rhs, |a, b| a + b),
        }
    }
}

impl<const N: usize> Sub for Dual<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            derivs: self.zip_with(rhs, |a, b| a - b),
        }
    }
}

impl<const N: usize> Mul for Dual<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.value, rhs.value);
        Self {
            value: a * b,
            derivs: self.zip_with(rhs, |da, db| b * da + a * db),
        }
    }
}

impl<const N: usize> Div for Dual<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.value, rhs.value);
        let b2 = b * b;
        Self {
            value: a / b,
            derivs: self.zip_with(rhs, |da, db| (b * da - a * db) / b2),
        }
    }
}

impl<const N: usize> Neg for Dual<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            derivs: self.derivs.map(|d| -d),
        }
    }
}

// Mixed operations with plain constants
impl<const N: usize> Add<f64> for Dual<N> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self {
            value: self.value + rhs,
            derivs: self.derivs,
        }
    }
}

impl<const N: usize> Sub<f64> for Dual<N> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self {
            value: self.value - rhs,
            derivs: self.derivs,
        }
    }
}

impl<const N: usize> Mul<f64> for Dual<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            value: self.value * rhs,
            derivs: self.derivs.map(|d| d * rhs),
        }
    }
}

impl<const N: usize> Div<f64> for Dual<N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            value: self.value / rhs,
            derivs: self.derivs.map(|d| d / rhs),
        }
    }
}

impl<const N: usize> Mul<Dual<N>> for f64 {
    type Output = Dual<N>;

    fn mul(self, rhs: Dual<N>) -> Dual<N> {
        rhs * self
    }
}

impl<const N: usize> Sub<Dual<N>> for f64 {
    type Output = Dual<N>;

    fn sub(self, rhs: Dual<N>) -> Dual<N> {
        -rhs + self
    }
}
