//! # euler1d
//!
//! A finite-volume library for the one-dimensional compressible Euler
//! equations on a uniform mesh.
//!
//! This crate provides the building blocks of a Godunov-type solver:
//! - Conservative/primitive state types with an ideal-gas equation of state
//! - Uniform 1D mesh with ghost cells
//! - Slope-limited MUSCL reconstruction (minmod, van Leer, superbee, MC)
//! - Approximate Riemann solvers (LLF/Rusanov, HLL, HLLC, MoversLE)
//! - Transmissive, reflective and periodic boundary conditions
//! - Explicit time integration (forward Euler, SSP-RK3)
//! - TOML configuration and CSV/VTK output
//!
//! Every component is generic over the working precision through the
//! [`types::Real`] trait, so `f32`/`f64` is a type-level choice made once
//! at the top.

pub mod boundary;
pub mod config;
pub mod equations;
pub mod flux;
pub mod initial;
pub mod io;
pub mod mesh;
pub mod reconstruction;
pub mod solver;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use boundary::{BoundaryRule, Periodic, Reflective, StandardBoundary, Transmissive};
pub use config::{Config, ConfigError};
pub use equations::{EquationOfState, IdealGas};
pub use flux::{hll_flux, hllc_flux, llf_flux, movers_le_flux, rusanov_flux, StandardFlux};
pub use initial::StandardInitialCondition;
pub use io::{write_csv, write_vtk, OutputError};
pub use mesh::Mesh1D;
pub use reconstruction::{reconstruct_first_order, reconstruct_muscl, StandardLimiter};
pub use solver::EulerSolver;
pub use time::{ExplicitEuler, SspRk3, StandardIntegrator, TimeIntegrator};
pub use types::{Conservative, Primitive, Real};
