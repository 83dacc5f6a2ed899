//! Property tests for the formula, its sensitivities and the optimizer.

mod optimizer;
mod sweep;
