//! Numerical flux schemes (approximate Riemann solvers).
//!
//! Every scheme shares the same pure signature: left state, right state,
//! equation of state in, one numerical flux out. Runtime selection goes
//! through the [`StandardFlux`] enum, the single dispatch point for the
//! solver's flux loop.

mod hll;
mod hllc;
mod llf;
mod movers_le;

pub use hll::hll_flux;
pub use hllc::hllc_flux;
pub use llf::{llf_flux, rusanov_flux};
pub use movers_le::movers_le_flux;

use crate::equations::EquationOfState;
use crate::types::{Conservative, Real};

/// Runtime-selected numerical flux scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardFlux {
    /// Local Lax-Friedrichs (default)
    #[default]
    Llf,
    /// Rusanov (identical to LLF)
    Rusanov,
    /// Harten-Lax-van Leer
    Hll,
    /// HLL with contact restoration
    Hllc,
    /// MoversLE adaptive dissipation
    MoversLe,
}

impl StandardFlux {
    /// Compute the numerical flux with the selected scheme.
    #[inline]
    pub fn compute<R: Real>(
        &self,
        u_l: &Conservative<R>,
        u_r: &Conservative<R>,
        eos: &EquationOfState<R>,
    ) -> Conservative<R> {
        match self {
            Self::Llf => llf_flux(u_l, u_r, eos),
            Self::Rusanov => rusanov_flux(u_l, u_r, eos),
            Self::Hll => hll_flux(u_l, u_r, eos),
            Self::Hllc => hllc_flux(u_l, u_r, eos),
            Self::MoversLe => movers_le_flux(u_l, u_r, eos),
        }
    }

    /// Scheme name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Llf => "llf",
            Self::Rusanov => "rusanov",
            Self::Hll => "hll",
            Self::Hllc => "hllc",
            Self::MoversLe => "movers_le",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;

    const TOL: f64 = 1e-12;

    fn eos() -> EquationOfState<f64> {
        EquationOfState::ideal_gas(1.4)
    }

    fn state(rho: f64, u: f64, p: f64) -> Conservative<f64> {
        eos().to_conservative(&Primitive::new(rho, u, p))
    }

    const ALL: [StandardFlux; 5] = [
        StandardFlux::Llf,
        StandardFlux::Rusanov,
        StandardFlux::Hll,
        StandardFlux::Hllc,
        StandardFlux::MoversLe,
    ];

    #[test]
    fn test_all_schemes_consistent() {
        // F(U, U) must equal the physical flux for every scheme
        let u = state(1.3, -0.7, 2.1);
        let f_phys = eos().flux(&u);

        for scheme in ALL {
            let f = scheme.compute(&u, &u, &eos());
            assert!((f.rho - f_phys.rho).abs() < TOL, "{}", scheme.name());
            assert!((f.rho_u - f_phys.rho_u).abs() < TOL, "{}", scheme.name());
            assert!((f.energy - f_phys.energy).abs() < TOL, "{}", scheme.name());
        }
    }

    #[test]
    fn test_all_schemes_finite_on_sod_states() {
        let u_l = state(1.0, 0.0, 1.0);
        let u_r = state(0.125, 0.0, 0.1);

        for scheme in ALL {
            let f = scheme.compute(&u_l, &u_r, &eos());
            assert!(f.is_finite(), "{}", scheme.name());
        }
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(StandardFlux::Llf.name(), "llf");
        assert_eq!(StandardFlux::Rusanov.name(), "rusanov");
        assert_eq!(StandardFlux::Hll.name(), "hll");
        assert_eq!(StandardFlux::Hllc.name(), "hllc");
        assert_eq!(StandardFlux::MoversLe.name(), "movers_le");
    }
}
