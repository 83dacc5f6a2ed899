//! Convergence criteria for the projected gradient ascent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parameters::ParameterVector;

/// State of the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizerState {
    /// The algorithm is still running.
    Running,

    /// The projected step moved no parameter by more than the tolerance.
    Converged,

    /// The iteration cap was reached first.
    Exhausted,
}

impl OptimizerState {
    /// Returns true if the optimization has terminated (either converged or exhausted).
    pub fn is_terminated(&self) -> bool {
        !matches!(self, OptimizerState::Running)
    }

    /// Returns true if the optimization has converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, OptimizerState::Converged)
    }

    /// Returns a description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            OptimizerState::Running => "Optimization is still running",
            OptimizerState::Converged => "Converged: projected step below tolerance",
            OptimizerState::Exhausted => "Terminated: maximum iterations reached",
        }
    }
}

impl fmt::Display for OptimizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Returns true when every component of `next` lies within `tolerance` of
/// `previous`.
///
/// `next` is the projected step, so a parameter held at a bound by the
/// projection counts as stationary even if its gradient is not zero. A NaN
/// component never converges.
pub fn step_converged(previous: &ParameterVector, next: &ParameterVector, tolerance: f64) -> bool {
    previous
        .to_array()
        .iter()
        .zip(next.to_array())
        .all(|(a, b)| (b - a).abs() <= tolerance)
}
