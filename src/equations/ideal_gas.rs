//! Ideal gas equation of state.
//!
//! Closure relation p = (gamma - 1) * rho * e linking pressure, density and
//! specific internal energy. All operations are pure functions of state.
//!
//! No input validation is performed: callers must guarantee rho != 0, and
//! non-positive density or pressure produce NaN through the square root in
//! the sound speed rather than a signaled error.

use crate::types::{Conservative, Primitive, Real};

/// Ideal gas with constant ratio of specific heats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas<R: Real> {
    /// Ratio of specific heats Cp/Cv (> 1)
    pub gamma: R,
}

impl<R: Real> IdealGas<R> {
    /// Create an ideal gas with the given gamma.
    #[inline]
    pub fn new(gamma: R) -> Self {
        Self { gamma }
    }

    /// Pressure from conservative variables: p = (gamma-1) * (E - rho*u^2/2).
    #[inline]
    pub fn pressure(&self, u: &Conservative<R>) -> R {
        let vel = u.rho_u / u.rho;
        let kinetic = R::HALF * u.rho * vel * vel;
        (self.gamma - R::ONE) * (u.energy - kinetic)
    }

    /// Pressure from density and specific internal energy.
    #[inline]
    pub fn pressure_from_internal(&self, rho: R, e_internal: R) -> R {
        (self.gamma - R::ONE) * rho * e_internal
    }

    /// Sound speed c = sqrt(gamma * p / rho).
    #[inline]
    pub fn sound_speed(&self, rho: R, p: R) -> R {
        (self.gamma * p / rho).sqrt()
    }

    /// Sound speed from conservative variables.
    #[inline]
    pub fn sound_speed_cons(&self, u: &Conservative<R>) -> R {
        self.sound_speed(u.rho, self.pressure(u))
    }

    /// Specific internal energy e = p / ((gamma-1) * rho).
    #[inline]
    pub fn internal_energy(&self, rho: R, p: R) -> R {
        p / ((self.gamma - R::ONE) * rho)
    }

    /// Total energy per unit volume from primitive variables.
    #[inline]
    pub fn total_energy(&self, w: &Primitive<R>) -> R {
        let e_internal = self.internal_energy(w.rho, w.p);
        let e_kinetic = R::HALF * w.u * w.u;
        w.rho * (e_internal + e_kinetic)
    }

    /// Specific enthalpy h = (E + p) / rho.
    #[inline]
    pub fn enthalpy(&self, u: &Conservative<R>) -> R {
        let p = self.pressure(u);
        (u.energy + p) / u.rho
    }

    /// Convert primitive to conservative variables.
    #[inline]
    pub fn to_conservative(&self, w: &Primitive<R>) -> Conservative<R> {
        Conservative::new(w.rho, w.rho * w.u, self.total_energy(w))
    }

    /// Convert conservative to primitive variables.
    #[inline]
    pub fn to_primitive(&self, u: &Conservative<R>) -> Primitive<R> {
        Primitive::new(u.rho, u.rho_u / u.rho, self.pressure(u))
    }

    /// Physical Euler flux F(U) = (rho*u, rho*u^2 + p, (E+p)*u).
    #[inline]
    pub fn flux(&self, u: &Conservative<R>) -> Conservative<R> {
        let vel = u.rho_u / u.rho;
        let p = self.pressure(u);
        Conservative::new(u.rho_u, u.rho_u * vel + p, (u.energy + p) * vel)
    }

    /// Physical Euler flux from primitive variables.
    ///
    /// Identical to [`flux`](Self::flux) on the corresponding conservative
    /// state.
    #[inline]
    pub fn flux_primitive(&self, w: &Primitive<R>) -> Conservative<R> {
        let energy = self.total_energy(w);
        Conservative::new(
            w.rho * w.u,
            w.rho * w.u * w.u + w.p,
            (energy + w.p) * w.u,
        )
    }
}
