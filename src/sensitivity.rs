//! Moment of inertia together with its sensitivities to each dimension.

use serde::{Deserialize, Serialize};

use crate::autodiff::{self, Dual};
use crate::parameters::{ParameterVector, PARAMETER_COUNT};
use crate::section::moment_of_inertia;

/// Default relative step for [`central_difference_gradient`].
pub const DEFAULT_FD_EPSILON: f64 = 1e-6;

/// Value of the moment of inertia and its gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientResult {
    /// Moment of inertia at the evaluated point.
    pub moi: f64,
    /// ∂I/∂p for p in `depth, width, t_web, t_flange`.
    pub gradient: [f64; PARAMETER_COUNT],
}

impl GradientResult {
    pub fn sens_depth(&self) -> f64 {
        self.gradient[0]
    }

    pub fn sens_width(&self) -> f64 {
        self.gradient[1]
    }

    pub fn sens_t_web(&self) -> f64 {
        self.gradient[2]
    }

    pub fn sens_t_flange(&self) -> f64 {
        self.gradient[3]
    }

    /// Returns true when the value and every partial are finite.
    pub fn is_finite(&self) -> bool {
        self.moi.is_finite() && self.gradient.iter().all(|g| g.is_finite())
    }
}

/// Evaluate the moment of inertia and its sensitivities by forward-mode
/// automatic differentiation.
///
/// Invalid geometry is not rejected; see [`crate::section`].
///
/// # Example
///
/// ```
/// use ibeam_opt::sensitivity::compute_moi_sensitivities;
///
/// let result = compute_moi_sensitivities(200.0, 40.0, 5.0, 5.0);
/// assert!((result.moi - 6_661_250.0).abs() < 1e-6);
/// assert!(result.sens_depth() > 0.0);
/// ```
pub fn compute_moi_sensitivities(
    depth: f64,
    width: f64,
    t_web: f64,
    t_flange: f64,
) -> GradientResult {
    let (moi, gradient) = autodiff::gradient(
        |[d, w, tw, tf]: [Dual<PARAMETER_COUNT>; PARAMETER_COUNT]| moment_of_inertia(d, w, tw, tf),
        [depth, width, t_web, t_flange],
    );
    GradientResult { moi, gradient }
}

/// [`compute_moi_sensitivities`] for a [`ParameterVector`].
pub fn sensitivities(params: &ParameterVector) -> GradientResult {
    compute_moi_sensitivities(params.depth, params.width, params.t_web, params.t_flange)
}

/// Gradient of `f` at `params` by central differences, ordered like
/// [`GradientResult::gradient`].
///
/// Each step is `epsilon` scaled by the magnitude of the parameter, falling
/// back to `epsilon` itself for parameters smaller than that.
///
/// ```
/// use ibeam_opt::parameters::ParameterVector;
/// use ibeam_opt::section::compute_moi_params;
/// use ibeam_opt::sensitivity::central_difference_gradient;
///
/// let grad = central_difference_gradient(compute_moi_params, &ParameterVector::new(200.0, 40.0, 5.0, 5.0), None);
/// assert!((grad[0] - 84_125.0).abs() / 84_125.0 < 1e-6);
/// ```
pub fn central_difference_gradient<F>(
    f: F,
    params: &ParameterVector,
    epsilon: Option<f64>,
) -> [f64; PARAMETER_COUNT]
where
    F: Fn(&ParameterVector) -> f64,
{
    let eps = epsilon.unwrap_or(DEFAULT_FD_EPSILON);
    let point = params.to_array();
    let mut grad = [0.0; PARAMETER_COUNT];

    for (j, partial) in grad.iter_mut().enumerate() {
        let h = if point[j].abs() > eps {
            point[j].abs() * eps
        } else {
            eps
        };

        let mut forward = point;
        forward[j] += h;
        let mut backward = point;
        backward[j] -= h;

        *partial = (f(&ParameterVector::from_array(forward)) - f(&ParameterVector::from_array(backward)))
            / (2.0 * h);
    }

    grad
}

/// Largest relative disagreement between `result` and a reference gradient.
///
/// Components where both sides are zero count as agreeing; a NaN on either
/// side counts as infinitely far apart.
pub fn max_relative_deviation(result: &GradientResult, reference: &[f64; PARAMETER_COUNT]) -> f64 {
    result
        .gradient
        .iter()
        .zip(reference.iter())
        .map(|(a, b)| {
            let scale = a.abs().max(b.abs());
            if a.is_nan() || b.is_nan() {
                f64::INFINITY
            } else if scale == 0.0 {
                0.0
            } else {
                (a - b).abs() / scale
            }
        })
        .fold(0.0, f64::max)
}
