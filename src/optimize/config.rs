//! Configuration options for the projected gradient ascent.
//!
//! This module defines the step size, iteration budget and convergence
//! tolerance of the optimizer, and [`StudyConfig`], which bundles them with
//! the starting point and bounds supplied by the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IbeamError, Result};
use crate::parameters::{ParameterBounds, ParameterVector};

/// Configuration options for the projected gradient ascent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AscentConfig {
    /// Multiplier applied to the raw gradient at each step. Default: 1e-5
    pub learning_rate: f64,

    /// Hard cap on the number of iterations. Default: 100
    pub max_iterations: usize,

    /// Absolute tolerance on the change of every parameter. Default: 1e-6
    pub tolerance: f64,
}

impl Default for AscentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-5,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl AscentConfig {
    pub fn new(learning_rate: f64, max_iterations: usize, tolerance: f64) -> Self {
        Self {
            learning_rate,
            max_iterations,
            tolerance,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reject settings the optimizer cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(IbeamError::InvalidConfig(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if self.max_iterations == 0 {
            return Err(IbeamError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.tolerance >= 0.0) {
            return Err(IbeamError::InvalidConfig(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Everything the caller supplies for one optimization run.
///
/// ```
/// use ibeam_opt::optimize::StudyConfig;
///
/// let study = StudyConfig::from_json_str(r#"{
///     "initial": {"depth": 150.0, "width": 40.0, "t_web": 5.0, "t_flange": 5.0},
///     "bounds": {
///         "depth": {"min": 100.0, "max": 300.0},
///         "width": {"min": 40.0, "max": 40.0},
///         "t_web": {"min": 5.0, "max": 5.0},
///         "t_flange": {"min": 5.0, "max": 5.0}
///     },
///     "ascent": {"learning_rate": 1e-4}
/// }"#).unwrap();
///
/// assert_eq!(study.ascent.learning_rate, 1e-4);
/// assert_eq!(study.ascent.max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    pub initial: ParameterVector,

    #[serde(default)]
    pub bounds: ParameterBounds,

    #[serde(default)]
    pub ascent: AscentConfig,
}

impl StudyConfig {
    pub fn new(initial: ParameterVector, bounds: ParameterBounds, ascent: AscentConfig) -> Self {
        Self {
            initial,
            bounds,
            ascent,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
