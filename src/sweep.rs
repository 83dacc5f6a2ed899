//! Depth sweep: sensitivities tabulated over a sequence of depths.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn, Level};

use crate::error::{IbeamError, Result};
use crate::parameters::ParameterVector;
use crate::section::compute_moi_params;
use crate::sensitivity::{central_difference_gradient, compute_moi_sensitivities, max_relative_deviation};

/// Largest number of depths a [`DepthRange`] may produce.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// One row of a depth sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub depth: f64,
    pub i_xx: f64,
    pub sens_depth: f64,
    pub sens_width: f64,
    pub sens_t_web: f64,
    pub sens_t_flange: f64,
}

/// Evenly spaced depths from `start` (inclusive) towards `stop` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl DepthRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        let range = Self { start, stop, step };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(IbeamError::InvalidConfig(format!(
                "depth range endpoints must be finite, got [{}, {})",
                self.start, self.stop
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(IbeamError::InvalidConfig(format!(
                "depth range step must be positive, got {}",
                self.step
            )));
        }
        let count = self.point_count();
        if !(count <= MAX_SWEEP_POINTS as f64) {
            return Err(IbeamError::InvalidConfig(format!(
                "depth range yields {} points, at most {} are allowed",
                count, MAX_SWEEP_POINTS
            )));
        }
        Ok(())
    }

    fn point_count(&self) -> f64 {
        ((self.stop - self.start) / self.step).ceil().max(0.0)
    }

    /// Materialize the depths. An empty range yields no values.
    ///
    /// Fails with [`IbeamError::InvalidConfig`] when the range does not
    /// validate, including when it would exceed [`MAX_SWEEP_POINTS`].
    pub fn values(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let count = self.point_count() as usize;
        Ok((0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect())
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            start: 100.0,
            stop: 201.0,
            step: 10.0,
        }
    }
}

/// A depth sweep with the remaining dimensions held fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub depths: DepthRange,
    pub width: f64,
    pub t_web: f64,
    pub t_flange: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            depths: DepthRange::default(),
            width: 40.0,
            t_web: 5.0,
            t_flange: 5.0,
        }
    }
}

impl SweepConfig {
    pub fn run(&self) -> Result<Vec<SweepRow>> {
        let depths = self.depths.values()?;
        Ok(sweep_depths(&depths, self.width, self.t_web, self.t_flange))
    }
}

/// Evaluate the moment of inertia and its sensitivities at every depth.
///
/// Rows come back in the order of `depths`. Values are not validated, so
/// NaN or infinite inputs produce NaN or infinite rows.
///
/// With `TRACE` enabled each row is also compared against central
/// differences and the largest relative deviation is logged.
pub fn sweep_depths(depths: &[f64], width: f64, t_web: f64, t_flange: f64) -> Vec<SweepRow> {
    depths
        .iter()
        .map(|&depth| {
            let result = compute_moi_sensitivities(depth, width, t_web, t_flange);
            if !result.is_finite() {
                warn!(depth, "non-finite sensitivity in sweep");
            }
            debug!(depth, i_xx = result.moi, "sweep point");
            if tracing::enabled!(Level::TRACE) {
                let params = ParameterVector::new(depth, width, t_web, t_flange);
                let numeric = central_difference_gradient(compute_moi_params, &params, None);
                trace!(
                    depth,
                    deviation = max_relative_deviation(&result, &numeric),
                    "finite-difference cross-check"
                );
            }
            SweepRow {
                depth,
                i_xx: result.moi,
                sens_depth: result.sens_depth(),
                sens_width: result.sens_width(),
                sens_t_web: result.sens_t_web(),
                sens_t_flange: result.sens_t_flange(),
            }
        })
        .collect()
}
