//! Projected gradient ascent on the moment of inertia.
//!
//! Each iteration evaluates the forward-mode gradient at the current
//! dimensions, records the pre-step point, steps along the gradient, clamps
//! the result into the bounds and stops once the projected step no longer
//! moves any parameter by more than the tolerance.

use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::parameters::{ParameterBounds, ParameterVector};
use crate::section::compute_moi_params;
use crate::sensitivity::sensitivities;

use super::config::{AscentConfig, StudyConfig};
use super::convergence::{step_converged, OptimizerState};

/// Snapshot of one optimizer iteration, taken before the step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Parameters at which the gradient was evaluated.
    pub params: ParameterVector,
    /// Moment of inertia at `params`.
    pub moi: f64,
}

/// Outcome of a projected gradient ascent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AscentResult {
    /// One record per executed iteration, in execution order.
    pub records: Vec<IterationRecord>,

    /// Terminal state, either `Converged` or `Exhausted`.
    pub state: OptimizerState,

    /// Projected parameters produced by the last step.
    pub final_params: ParameterVector,

    /// Moment of inertia at `final_params`.
    pub final_moi: f64,

    /// The number of iterations performed
    pub iterations: usize,
}

impl AscentResult {
    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }

    /// The last recorded iteration, if any.
    pub fn last_record(&self) -> Option<&IterationRecord> {
        self.records.last()
    }
}

impl fmt::Display for AscentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gradient Ascent Result:")?;
        writeln!(f, "  State: {}", self.state)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Moment of inertia: {:.6e}", self.final_moi)?;
        writeln!(
            f,
            "  Parameters: depth={}, width={}, t_web={}, t_flange={}",
            self.final_params.depth,
            self.final_params.width,
            self.final_params.t_web,
            self.final_params.t_flange
        )?;
        Ok(())
    }
}

/// Bounded gradient ascent maximizing the moment of inertia.
#[derive(Debug, Clone)]
pub struct GradientAscent {
    config: AscentConfig,
    bounds: ParameterBounds,
}

impl GradientAscent {
    /// Create an optimizer, rejecting an invalid configuration or bounds.
    pub fn new(config: AscentConfig, bounds: ParameterBounds) -> Result<Self> {
        config.validate()?;
        bounds.validate()?;
        Ok(Self { config, bounds })
    }

    /// Run the ascent from `initial`.
    ///
    /// The starting point is first projected onto the bounds and must then
    /// describe a physical section, otherwise an `InvalidGeometry` error is
    /// returned before any iteration runs.
    pub fn run(&self, initial: &ParameterVector) -> Result<AscentResult> {
        let mut current = self.bounds.project(initial);
        if current != *initial {
            warn!(?initial, projected = ?current, "starting point outside bounds, projected");
        }
        current.validate()?;

        let lr = self.config.learning_rate;
        let mut records = Vec::new();
        let mut state = OptimizerState::Running;

        for iteration in 0..self.config.max_iterations {
            let result = sensitivities(&current);
            records.push(IterationRecord {
                iteration,
                params: current,
                moi: result.moi,
            });

            if !result.is_finite() {
                warn!(iteration, moi = result.moi, gradient = ?result.gradient, "non-finite gradient");
            }

            let gradient = Array1::from_vec(result.gradient.to_vec());
            let stepped = current.to_ndarray() + gradient * lr;
            let next = self.bounds.project(&ParameterVector::from_ndarray(&stepped)?);

            debug!(
                iteration,
                moi = result.moi,
                step = current.max_abs_diff(&next),
                "ascent step"
            );

            if step_converged(&current, &next, self.config.tolerance) {
                state = OptimizerState::Converged;
                current = next;
                break;
            }
            current = next;
        }

        if state == OptimizerState::Running {
            state = OptimizerState::Exhausted;
        }

        let final_moi = compute_moi_params(&current);
        info!(
            iterations = records.len(),
            final_moi,
            state = state.description(),
            "gradient ascent finished"
        );

        Ok(AscentResult {
            iterations: records.len(),
            records,
            state,
            final_params: current,
            final_moi,
        })
    }
}

/// Run a projected gradient ascent with the given settings.
pub fn optimize(
    initial: &ParameterVector,
    bounds: &ParameterBounds,
    config: &AscentConfig,
) -> Result<AscentResult> {
    GradientAscent::new(config.clone(), *bounds)?.run(initial)
}

impl StudyConfig {
    /// Run the optimization this configuration describes.
    pub fn run(&self) -> Result<AscentResult> {
        optimize(&self.initial, &self.bounds, &self.ascent)
    }
}
