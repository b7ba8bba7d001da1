//! Solver orchestration.

mod euler;
mod factory;

pub use euler::EulerSolver;
pub use factory::{create_eos, create_initial_condition};
