//! Boundary conditions.
//!
//! Each rule fills the ghost cells on one side from interior values.
//! Rules are applied independently per side, on a buffer that includes
//! ghost storage for both sides, before any flux is computed.

use crate::mesh::Mesh1D;
use crate::types::{Conservative, Real};

/// Ghost-cell fill rule for one boundary side.
pub trait BoundaryRule {
    /// Fill the left ghost cells of `u` from interior values.
    fn apply_left<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>);

    /// Fill the right ghost cells of `u` from interior values.
    fn apply_right<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>);

    /// Rule name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Transmissive (zero-gradient) boundary: every ghost cell copies the
/// adjacent-most interior cell, letting waves exit cleanly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transmissive;

impl BoundaryRule for Transmissive {
    fn apply_left<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        let first = mesh.first_interior();
        for i in 0..first {
            u[i] = u[first];
        }
    }

    fn apply_right<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        let last = mesh.last_interior();
        for i in (last + 1)..mesh.total_cells() {
            u[i] = u[last];
        }
    }

    fn name(&self) -> &'static str {
        "transmissive"
    }
}

/// Reflective (solid wall) boundary: ghost cell at offset g mirrors the
/// interior cell at the same offset with the momentum negated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflective;

impl BoundaryRule for Reflective {
    fn apply_left<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        let first = mesh.first_interior();
        for g in 0..Mesh1D::<R>::NUM_GHOSTS {
            let ghost = first - 1 - g;
            let interior = u[first + g];
            u[ghost] = Conservative::new(interior.rho, -interior.rho_u, interior.energy);
        }
    }

    fn apply_right<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        let last = mesh.last_interior();
        for g in 0..Mesh1D::<R>::NUM_GHOSTS {
            let ghost = last + 1 + g;
            let interior = u[last - g];
            u[ghost] = Conservative::new(interior.rho, -interior.rho_u, interior.energy);
        }
    }

    fn name(&self) -> &'static str {
        "reflective"
    }
}

/// Periodic boundary: left ghosts copy the right-interior tail, right
/// ghosts copy the left-interior head.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Periodic;

impl BoundaryRule for Periodic {
    fn apply_left<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        let first = mesh.first_interior();
        let last = mesh.last_interior();
        for g in 0..Mesh1D::<R>::NUM_GHOSTS {
            u[first - 1 - g] = u[last - g];
        }
    }

    fn apply_right<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        let first = mesh.first_interior();
        let last = mesh.last_interior();
        for g in 0..Mesh1D::<R>::NUM_GHOSTS {
            u[last + 1 + g] = u[first + g];
        }
    }

    fn name(&self) -> &'static str {
        "periodic"
    }
}

/// Runtime-selected boundary rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardBoundary {
    /// Zero-gradient outflow (default)
    #[default]
    Transmissive,
    /// Solid wall
    Reflective,
    /// Wrap-around
    Periodic,
}

impl StandardBoundary {
    /// Fill the left ghost cells with the selected rule.
    #[inline]
    pub fn apply_left<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        match self {
            Self::Transmissive => Transmissive.apply_left(u, mesh),
            Self::Reflective => Reflective.apply_left(u, mesh),
            Self::Periodic => Periodic.apply_left(u, mesh),
        }
    }

    /// Fill the right ghost cells with the selected rule.
    #[inline]
    pub fn apply_right<R: Real>(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>) {
        match self {
            Self::Transmissive => Transmissive.apply_right(u, mesh),
            Self::Reflective => Reflective.apply_right(u, mesh),
            Self::Periodic => Periodic.apply_right(u, mesh),
        }
    }

    /// Rule name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transmissive => Transmissive.name(),
            Self::Reflective => Reflective.name(),
            Self::Periodic => Periodic.name(),
        }
    }
}
