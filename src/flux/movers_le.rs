//! MoversLE flux with adaptive, per-component dissipation.
//!
//! A low-dissipation central scheme in the MOVERS family (Method of
//! Optimal Viscosity for Enhanced Resolution of Shocks): the dissipation
//! coefficient for each component is the local wave speed |dF/dU| of that
//! component, clipped into the physical eigenvalue range. Where the flux
//! and state jumps vanish together (steady contacts and shocks), the
//! dissipation vanishes and the discontinuity is captured exactly.
//!
//! Reference: Jaisankar & Raghurama Rao, "A central Rankine-Hugoniot
//! solver for hyperbolic conservation laws", J. Comput. Phys. 228 (2009).

use crate::equations::EquationOfState;
use crate::types::{Conservative, Real, NUM_VARS};

// Scheme-specific jump threshold, deliberately independent of the
// precision-dependent guard epsilon used by the reconstruction.
const JUMP_EPSILON: f64 = 1.0e-6;

/// MoversLE numerical flux.
pub fn movers_le_flux<R: Real>(
    u_l: &Conservative<R>,
    u_r: &Conservative<R>,
    eos: &EquationOfState<R>,
) -> Conservative<R> {
    let eps = R::from_f64_lossy(JUMP_EPSILON);

    let vel_l = u_l.rho_u / u_l.rho;
    let vel_r = u_r.rho_u / u_r.rho;
    let c_l = eos.sound_speed_cons(u_l);
    let c_r = eos.sound_speed_cons(u_r);

    // Eigenvalue magnitudes {|u - c|, |u|, |u + c|} over both states
    let eigs = [
        (vel_l - c_l).abs(),
        vel_l.abs(),
        (vel_l + c_l).abs(),
        (vel_r - c_r).abs(),
        vel_r.abs(),
        (vel_r + c_r).abs(),
    ];
    let mut eig_min = eigs[0];
    let mut eig_max = eigs[0];
    for &e in &eigs[1..] {
        eig_min = eig_min.min(e);
        eig_max = eig_max.max(e);
    }

    let f_l = eos.flux(u_l);
    let f_r = eos.flux(u_r);

    let mut flux = Conservative::zero();
    for k in 0..NUM_VARS {
        let df = f_r[k] - f_l[k];
        let du = u_r[k] - u_l[k];

        let diss = if df.abs() < eps {
            R::ZERO
        } else if du.abs() < eps {
            eig_min
        } else {
            // Local Rankine-Hugoniot wave speed, clipped to the eigenvalue range
            let s = (df / du).abs().max(eig_min).min(eig_max);
            if s < eps {
                R::ZERO
            } else {
                s
            }
        };

        flux[k] = R::HALF * (f_l[k] + f_r[k]) - R::HALF * diss * du;
    }

    flux
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
    fn test_movers_le_consistency() {
        let u = state(1.0, 1.0, 1.0);
        let f_num = movers_le_flux(&u, &u, &eos());
        let f_phys = eos().flux(&u);

        assert!((f_num.rho - f_phys.rho).abs() < TOL);
        assert!((f_num.rho_u - f_phys.rho_u).abs() < TOL);
        assert!((f_num.energy - f_phys.energy).abs() < TOL);
    }

    #[test]
    fn test_movers_le_exact_on_stationary_contact() {
        // Flux jump and mass flux both vanish across a steady contact, so
        // the adaptive dissipation switches off and the contact is exact
        let u_l = state(1.0, 0.0, 1.0);
        let u_r = state(0.5, 0.0, 1.0);

        let f = movers_le_flux(&u_l, &u_r, &eos());
        assert!(f.rho.abs() < TOL);
        assert!((f.rho_u - 1.0).abs() < TOL);
        assert!(f.energy.abs() < TOL);
    }

    #[test]
    fn test_movers_le_finite_on_sod_states() {
        let f = movers_le_flux(&state(1.0, 0.0, 1.0), &state(0.125, 0.0, 0.1), &eos());
        assert!(f.is_finite());
    }

    #[test]
    fn test_movers_le_dissipation_within_llf() {
        // The clipped wave speed never exceeds the maximum eigenvalue, so
        // the dissipation term is bounded by the LLF one component-wise
        let u_l = state(1.0, 0.2, 1.0);
        let u_r = state(0.6, -0.1, 0.7);

        let f = movers_le_flux(&u_l, &u_r, &eos());
        let f_l = eos().flux(&u_l);
        let f_r = eos().flux(&u_r);

        let c_l = eos().sound_speed_cons(&u_l);
        let c_r = eos().sound_speed_cons(&u_r);
        let vel_l = u_l.rho_u / u_l.rho;
        let vel_r = u_r.rho_u / u_r.rho;
        let lambda_max = (vel_l.abs() + c_l).max(vel_r.abs() + c_r);

        for k in 0..3 {
            let central = 0.5 * (f_l[k] + f_r[k]);
            let bound = 0.5 * lambda_max * (u_r[k] - u_l[k]).abs();
            assert!((f[k] - central).abs() <= bound + TOL);
        }
    }
}
