//! Parameter bounds implementation
//!
//! This module provides the box constraints used by the projected gradient
//! ascent: a `[min, max]` interval per parameter, where an interval with
//! `min == max` pins the parameter to a single value.

use std::f64::{INFINITY, NEG_INFINITY};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::vector::ParameterVector;

/// Errors that can occur when working with parameter bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must be less than or equal to max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Parameter value {value} is outside bounds: [{min}, {max}]")]
    ValueOutsideBounds { value: f64, min: f64, max: f64 },
}

/// Represents the bounds constraints on a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

impl Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bounds", 2)?;

        // JSON has no infinity, open ends are written as null
        if self.min.is_infinite() && self.min.is_sign_negative() {
            state.serialize_field("min", &serde_json::Value::Null)?;
        } else {
            state.serialize_field("min", &self.min)?;
        }

        if self.max.is_infinite() && self.max.is_sign_positive() {
            state.serialize_field("max", &serde_json::Value::Null)?;
        } else {
            state.serialize_field("max", &self.max)?;
        }

        state.end()
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper {
            #[serde(default)]
            min: Option<f64>,

            #[serde(default)]
            max: Option<f64>,
        }

        let helper = BoundsHelper::deserialize(deserializer)?;

        let min = helper.min.unwrap_or(NEG_INFINITY);
        let max = helper.max.unwrap_or(INFINITY);

        Bounds::new(min, max).map_err(serde::de::Error::custom)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: NEG_INFINITY,
            max: INFINITY,
        }
    }
}

impl Bounds {
    /// Create a new bounds constraint with min and max values
    ///
    /// # Arguments
    ///
    /// * `min` - Minimum allowed value for the parameter
    /// * `max` - Maximum allowed value for the parameter
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min <= max, or an error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use ibeam_opt::parameters::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(100.0, 300.0).unwrap();
    /// assert_eq!(bounds.min, 100.0);
    /// assert_eq!(bounds.max, 300.0);
    /// assert!(Bounds::new(3.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        // Written as a negated comparison so NaN endpoints are rejected too
        if !(min <= max) {
            return Err(BoundsError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    /// Create a degenerate interval `[value, value]` that fixes a parameter.
    ///
    /// ```
    /// use ibeam_opt::parameters::bounds::Bounds;
    ///
    /// let bounds = Bounds::fixed(40.0).unwrap();
    /// assert!(bounds.is_fixed());
    /// assert_eq!(bounds.clamp(55.0), 40.0);
    /// ```
    pub fn fixed(value: f64) -> Result<Self, BoundsError> {
        Self::new(value, value)
    }

    /// Create an unbounded constraint (negative infinity to positive infinity)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a bounds constraint with only a minimum value
    pub fn min_only(min: f64) -> Self {
        Self {
            min,
            max: INFINITY,
        }
    }

    /// Create a bounds constraint with only a maximum value
    pub fn max_only(max: f64) -> Self {
        Self {
            min: NEG_INFINITY,
            max,
        }
    }

    /// Check the `min <= max` invariant, for values built through the public fields.
    pub fn validate(&self) -> Result<(), BoundsError> {
        Self::new(self.min, self.max).map(|_| ())
    }

    /// Check if a value is within the bounds
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check a value against the bounds, reporting the violation as an error.
    pub fn check(&self, value: f64) -> Result<(), BoundsError> {
        if self.is_within_bounds(value) {
            Ok(())
        } else {
            Err(BoundsError::ValueOutsideBounds {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Returns true if the interval collapses to a single value.
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Clamp a value to be within the bounds
    ///
    /// A fixed interval always yields its single value. Otherwise NaN passes
    /// through unchanged. Bounds must satisfy `min <= max`, which
    /// [`Bounds::new`] guarantees.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.is_fixed() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// One [`Bounds`] per field of [`ParameterVector`]. Omitted fields are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterBounds {
    pub depth: Bounds,
    pub width: Bounds,
    pub t_web: Bounds,
    pub t_flange: Bounds,
}

impl ParameterBounds {
    pub fn new(depth: Bounds, width: Bounds, t_web: Bounds, t_flange: Bounds) -> Self {
        Self {
            depth,
            width,
            t_web,
            t_flange,
        }
    }

    /// Bounds that leave every parameter free.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bounds in parameter order: depth, width, t_web, t_flange.
    pub fn as_array(&self) -> [Bounds; 4] {
        [self.depth, self.width, self.t_web, self.t_flange]
    }

    /// Validate every interval.
    pub fn validate(&self) -> Result<(), BoundsError> {
        for bounds in self.as_array() {
            bounds.validate()?;
        }
        Ok(())
    }

    /// Check whether every component of `params` lies inside its interval.
    pub fn contains(&self, params: &ParameterVector) -> bool {
        self.as_array()
            .iter()
            .zip(params.to_array())
            .all(|(bounds, value)| bounds.is_within_bounds(value))
    }

    /// Clamp each component of `params` into its interval.
    pub fn project(&self, params: &ParameterVector) -> ParameterVector {
        ParameterVector {
            depth: self.depth.clamp(params.depth),
            width: self.width.clamp(params.width),
            t_web: self.t_web.clamp(params.t_web),
            t_flange: self.t_flange.clamp(params.t_flange),
        }
    }
}
