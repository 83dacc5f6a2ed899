//! # I-Beam Section Properties
//!
//! Area moment of inertia about the strong (horizontal) axis of a doubly
//! symmetric I-beam.
//!
//! ```text
//!     ┌───────────────┐  ─┬─ t_flange
//!     └─────┐   ┌─────┘   │
//!           │   │         │
//!           │   │ t_web   │ depth
//!           │   │         │
//!     ┌─────┘   └─────┐   │
//!     └───────────────┘  ─┴─
//!          width
//! ```
//!
//! I = t_web·d_web³/12 + (width/12)·(depth³ − d_web³), with d_web = depth − 2·t_flange.
//!
//! Ref: <https://www.engineeringtoolbox.com/area-moment-inertia-d_1328.html>
//!
//! The formula performs no validation. Dimensions that do not describe a
//! physical section (for example `t_flange > depth / 2`) still evaluate and
//! may produce a negative or meaningless result; use
//! [`ParameterVector::validate`] to reject them up front.

use crate::autodiff::Scalar;
use crate::parameters::ParameterVector;

/// Moment of inertia over any [`Scalar`], shared by the plain and the
/// differentiated evaluation.
pub fn moment_of_inertia<T: Scalar>(depth: T, width: T, t_web: T, t_flange: T) -> T {
    let depth_web = depth - t_flange * 2.0_f64;
    t_web * depth_web.powi(3) / 12.0_f64 + width / 12.0_f64 * (depth.powi(3) - depth_web.powi(3))
}

/// Moment of inertia of the section described by the four dimensions.
///
/// # Example
/// ```rust
/// use ibeam_opt::section::compute_moi;
///
/// let moi = compute_moi(200.0, 40.0, 5.0, 5.0);
/// assert!((moi - 6_661_250.0).abs() < 1e-6);
/// ```
#[inline]
pub fn compute_moi(depth: f64, width: f64, t_web: f64, t_flange: f64) -> f64 {
    moment_of_inertia(depth, width, t_web, t_flange)
}

/// [`compute_moi`] for a [`ParameterVector`].
pub fn compute_moi_params(params: &ParameterVector) -> f64 {
    compute_moi(params.depth, params.width, params.t_web, params.t_flange)
}

/// Closed-form partial derivatives of the moment of inertia, ordered
/// `depth, width, t_web, t_flange`.
///
/// - ∂I/∂depth    = t_web·d_web²/4 + width·(depth² − d_web²)/4
/// - ∂I/∂width    = (depth³ − d_web³)/12
/// - ∂I/∂t_web    = d_web³/12
/// - ∂I/∂t_flange = (width − t_web)·d_web²/2
pub fn moment_of_inertia_gradient(params: &ParameterVector) -> [f64; 4] {
    let ParameterVector {
        depth,
        width,
        t_web,
        t_flange,
    } = *params;
    let depth_web = depth - 2.0 * t_flange;
    let dw2 = depth_web.powi(2);

    [
        t_web * dw2 / 4.0 + width * (depth.powi(2) - dw2) / 4.0,
        (depth.powi(3) - depth_web.powi(3)) / 12.0,
        depth_web.powi(3) / 12.0,
        (width - t_web) * dw2 / 2.0,
    ]
}
