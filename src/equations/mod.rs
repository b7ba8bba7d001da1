//! Equations of state.
//!
//! The set of supported models is closed and known at compile time, so
//! runtime selection goes through the [`EquationOfState`] enum rather than
//! trait objects.

mod ideal_gas;

pub use ideal_gas::IdealGas;

use crate::types::{Conservative, Primitive, Real};

/// Runtime-selected equation of state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EquationOfState<R: Real> {
    /// Ideal gas with constant gamma
    IdealGas(IdealGas<R>),
}

impl<R: Real> EquationOfState<R> {
    /// Create an ideal-gas equation of state.
    pub fn ideal_gas(gamma: R) -> Self {
        Self::IdealGas(IdealGas::new(gamma))
    }

    /// Model name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdealGas(_) => "ideal_gas",
        }
    }

    /// Pressure from conservative variables.
    #[inline]
    pub fn pressure(&self, u: &Conservative<R>) -> R {
        match self {
            Self::IdealGas(eos) => eos.pressure(u),
        }
    }

    /// Sound speed from density and pressure.
    #[inline]
    pub fn sound_speed(&self, rho: R, p: R) -> R {
        match self {
            Self::IdealGas(eos) => eos.sound_speed(rho, p),
        }
    }

    /// Sound speed from conservative variables.
    #[inline]
    pub fn sound_speed_cons(&self, u: &Conservative<R>) -> R {
        match self {
            Self::IdealGas(eos) => eos.sound_speed_cons(u),
        }
    }

    /// Convert primitive to conservative variables.
    #[inline]
    pub fn to_conservative(&self, w: &Primitive<R>) -> Conservative<R> {
        match self {
            Self::IdealGas(eos) => eos.to_conservative(w),
        }
    }

    /// Convert conservative to primitive variables.
    #[inline]
    pub fn to_primitive(&self, u: &Conservative<R>) -> Primitive<R> {
        match self {
            Self::IdealGas(eos) => eos.to_primitive(u),
        }
    }

    /// Physical Euler flux.
    #[inline]
    pub fn flux(&self, u: &Conservative<R>) -> Conservative<R> {
        match self {
            Self::IdealGas(eos) => eos.flux(u),
        }
    }
}
