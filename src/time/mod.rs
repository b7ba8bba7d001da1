//! Time integration.

mod integrator;

pub use integrator::{ExplicitEuler, SspRk3, StandardIntegrator, TimeIntegrator};
