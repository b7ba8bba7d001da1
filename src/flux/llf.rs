//! Local Lax-Friedrichs (Rusanov) flux.
//!
//! The simplest and most diffusive scheme in the family:
//!
//! ```text
//! F_{i+1/2} = (F_L + F_R)/2 - lambda_max/2 * (U_R - U_L)
//! lambda_max = max(|u_L| + c_L, |u_R| + c_R)
//! ```
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid
//! Dynamics", ch. 10.

use crate::equations::EquationOfState;
use crate::types::{Conservative, Real};

/// Local Lax-Friedrichs numerical flux.
pub fn llf_flux<R: Real>(
    u_l: &Conservative<R>,
    u_r: &Conservative<R>,
    eos: &EquationOfState<R>,
) -> Conservative<R> {
    let f_l = eos.flux(u_l);
    let f_r = eos.flux(u_r);

    let vel_l = u_l.rho_u / u_l.rho;
    let vel_r = u_r.rho_u / u_r.rho;
    let c_l = eos.sound_speed_cons(u_l);
    let c_r = eos.sound_speed_cons(u_r);

    let lambda_max = (vel_l.abs() + c_l).max(vel_r.abs() + c_r);

    ((f_l + f_r) - (*u_r - *u_l) * lambda_max) * R::HALF
}

/// Rusanov flux, identical to local Lax-Friedrichs for the scalar maximum
/// wave speed used here.
#[inline]
pub fn rusanov_flux<R: Real>(
    u_l: &Conservative<R>,
    u_r: &Conservative<R>,
    eos: &EquationOfState<R>,
) -> Conservative<R> {
    llf_flux(u_l, u_r, eos)
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

    #[test]
    fn test_llf_consistency() {
        // Identical states must return the physical flux exactly
        let u = state(1.0, 1.0, 1.0);
        let f_num = llf_flux(&u, &u, &eos());
        let f_phys = eos().flux(&u);

        assert!((f_num.rho - f_phys.rho).abs() < TOL);
        assert!((f_num.rho_u - f_phys.rho_u).abs() < TOL);
        assert!((f_num.energy - f_phys.energy).abs() < TOL);
    }

    #[test]
    fn test_llf_finite_on_sod_states() {
        let u_l = state(1.0, 0.0, 1.0);
        let u_r = state(0.125, 0.0, 0.1);

        let f = llf_flux(&u_l, &u_r, &eos());
        assert!(f.is_finite());
    }

    #[test]
    fn test_llf_dissipation_sign() {
        // Still-air density jump: dissipation drives mass flux from the
        // dense side toward the light side
        let u_l = state(1.0, 0.0, 1.0);
        let u_r = state(0.5, 0.0, 1.0);

        let f = llf_flux(&u_l, &u_r, &eos());
        assert!(f.rho > 0.0);
    }

    #[test]
    fn test_rusanov_identical_to_llf() {
        let u_l = state(1.0, 0.3, 1.0);
        let u_r = state(0.8, -0.2, 0.9);

        let llf = llf_flux(&u_l, &u_r, &eos());
        let rus = rusanov_flux(&u_l, &u_r, &eos());

        assert_eq!(llf, rus);
    }
}
