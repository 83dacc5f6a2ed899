//! # ibeam-opt
//!
//! `ibeam-opt` computes the area moment of inertia of an I-beam
//! cross-section, its exact sensitivities to each dimension, and drives a
//! bounded gradient ascent that maximizes it.
//!
//! The library provides:
//! - The closed-form moment of inertia, written once over a generic scalar
//! - Forward-mode automatic differentiation with multi-component dual numbers
//! - A depth sweep producing tables of values and sensitivities
//! - A projected gradient ascent with per-parameter bounds
//! - Delimited and JSON export of the resulting tables
//!
//! ## Basic Usage
//!
//! ```
//! use ibeam_opt::parameters::{Bounds, ParameterBounds, ParameterVector};
//! use ibeam_opt::optimize::{optimize, AscentConfig};
//! use ibeam_opt::sensitivity::compute_moi_sensitivities;
//!
//! let result = compute_moi_sensitivities(200.0, 40.0, 5.0, 5.0);
//! assert!(result.sens_depth() > 0.0);
//!
//! let bounds = ParameterBounds::new(
//!     Bounds::new(100.0, 300.0).unwrap(),
//!     Bounds::fixed(40.0).unwrap(),
//!     Bounds::fixed(5.0).unwrap(),
//!     Bounds::fixed(5.0).unwrap(),
//! );
//! let config = AscentConfig::default().with_learning_rate(1e-3);
//! let run = optimize(&ParameterVector::new(150.0, 40.0, 5.0, 5.0), &bounds, &config).unwrap();
//!
//! assert!(run.is_converged());
//! assert_eq!(run.final_params.depth, 300.0);
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

// Formula and differentiation
pub mod autodiff;
pub mod section;
pub mod sensitivity;

// Drivers
pub mod optimize;
pub mod sweep;

// Export
pub mod report;

// Re-exports for convenience
pub use error::{IbeamError, Result};
pub use optimize::{optimize, AscentConfig, AscentResult, GradientAscent, IterationRecord};
pub use parameters::{Bounds, ParameterBounds, ParameterVector};
pub use sensitivity::{compute_moi_sensitivities, GradientResult};
pub use section::compute_moi;
pub use sweep::{sweep_depths, SweepRow};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
