//! The four cross-section dimensions of an I-beam.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{IbeamError, Result};

/// Number of design parameters.
pub const PARAMETER_COUNT: usize = 4;

/// Parameter names in vector order.
pub const PARAMETER_NAMES: [&str; PARAMETER_COUNT] = ["depth", "width", "t_web", "t_flange"];

/// Geometric parameters of an I-beam cross-section.
///
/// Field order is significant: gradients, bounds and exported columns all
/// follow `depth, width, t_web, t_flange`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterVector {
    /// Overall depth of the section.
    pub depth: f64,
    /// Flange width.
    pub width: f64,
    /// Web thickness.
    pub t_web: f64,
    /// Flange thickness.
    pub t_flange: f64,
}

impl ParameterVector {
    pub fn new(depth: f64, width: f64, t_web: f64, t_flange: f64) -> Self {
        Self {
            depth,
            width,
            t_web,
            t_flange,
        }
    }

    pub fn from_array(values: [f64; PARAMETER_COUNT]) -> Self {
        let [depth, width, t_web, t_flange] = values;
        Self::new(depth, width, t_web, t_flange)
    }

    pub fn to_array(&self) -> [f64; PARAMETER_COUNT] {
        [self.depth, self.width, self.t_web, self.t_flange]
    }

    /// Convert to an `ndarray` vector.
    pub fn to_ndarray(&self) -> Array1<f64> {
        Array1::from_vec(self.to_array().to_vec())
    }

    /// Build from an `ndarray` vector of exactly four components.
    pub fn from_ndarray(values: &Array1<f64>) -> Result<Self> {
        if values.len() != PARAMETER_COUNT {
            return Err(IbeamError::InvalidParameter(format!(
                "Expected {} parameters, got {}",
                PARAMETER_COUNT,
                values.len()
            )));
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// Clear depth of the web between the flanges, `depth - 2 * t_flange`.
    pub fn web_depth(&self) -> f64 {
        self.depth - 2.0 * self.t_flange
    }

    /// Check that the dimensions describe a physical I-beam.
    ///
    /// Every dimension must be finite and positive and the flanges must leave
    /// a web of positive depth.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in PARAMETER_NAMES.iter().zip(self.to_array()) {
            if !value.is_finite() || value <= 0.0 {
                return Err(IbeamError::InvalidGeometry(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }

        if self.web_depth() <= 0.0 {
            return Err(IbeamError::InvalidGeometry(format!(
                "depth {} must exceed twice the flange thickness {}",
                self.depth, self.t_flange
            )));
        }

        Ok(())
    }

    /// Largest absolute componentwise difference to `other`.
    pub fn max_abs_diff(&self, other: &ParameterVector) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}
