//! # Parameter System
//!
//! Design parameters of the I-beam cross-section and the box constraints
//! applied to them during optimization.
//!
//! ## Core Components
//!
//! - [`ParameterVector`]: the four dimensions `depth, width, t_web, t_flange`
//! - [`Bounds`]: a `[min, max]` interval for one parameter
//! - [`ParameterBounds`]: one interval per parameter, with projection
//!
//! ## Example Usage
//!
//! ```rust
//! use ibeam_opt::parameters::{Bounds, ParameterBounds, ParameterVector};
//!
//! let bounds = ParameterBounds::new(
//!     Bounds::new(100.0, 300.0).unwrap(),
//!     Bounds::fixed(40.0).unwrap(),
//!     Bounds::fixed(5.0).unwrap(),
//!     Bounds::fixed(5.0).unwrap(),
//! );
//!
//! let projected = bounds.project(&ParameterVector::new(350.0, 40.0, 5.0, 5.0));
//! assert_eq!(projected.depth, 300.0);
//! ```

pub mod bounds;
pub mod vector;

pub use bounds::{Bounds, BoundsError, ParameterBounds};
pub use vector::{ParameterVector, PARAMETER_COUNT, PARAMETER_NAMES};
