//! Bounded projected gradient ascent maximizing the moment of inertia.
//!
//! The optimizer steps along the forward-mode gradient with a fixed
//! learning rate and clamps every step back into the per-parameter bounds.
//! There is no line search and no momentum; the run ends when a projected
//! step moves no parameter by more than the tolerance, or when the
//! iteration cap is reached.

pub mod ascent;
pub mod config;
pub mod convergence;

pub use ascent::{optimize, AscentResult, GradientAscent, IterationRecord};
pub use config::{AscentConfig, StudyConfig};
pub use convergence::{step_converged, OptimizerState};
