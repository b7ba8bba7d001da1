//! HLLC (HLL with Contact) approximate Riemann solver.
//!
//! Extends HLL with a middle wave at the contact speed S*, restoring the
//! contact discontinuity the two-wave model smears. The star states are
//!
//! ```text
//! U*_K = rho_K (S_K - u_K)/(S_K - S*) * [1, S*, E_K/rho_K + (S* - u_K)(S* + p_K/(rho_K (S_K - u_K)))]
//! ```
//!
//! for K in {L, R}, and the flux on the selected side is
//! F_K + S_K (U*_K - U_K).
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid
//! Dynamics", ch. 10.4.

use crate::equations::EquationOfState;
use crate::types::{Conservative, Real};

/// HLLC numerical flux with Davis wave-speed estimates.
pub fn hllc_flux<R: Real>(
    u_l: &Conservative<R>,
    u_r: &Conservative<R>,
    eos: &EquationOfState<R>,
) -> Conservative<R> {
    let rho_l = u_l.rho;
    let vel_l = u_l.rho_u / rho_l;
    let p_l = eos.pressure(u_l);
    let c_l = eos.sound_speed(rho_l, p_l);
    let energy_l = u_l.energy;

    let rho_r = u_r.rho;
    let vel_r = u_r.rho_u / rho_r;
    let p_r = eos.pressure(u_r);
    let c_r = eos.sound_speed(rho_r, p_r);
    let energy_r = u_r.energy;

    // Davis estimates for the outer waves
    let s_l = (vel_l - c_l).min(vel_r - c_r);
    let s_r = (vel_l + c_l).max(vel_r + c_r);

    // Contact wave speed
    let s_star = (p_r - p_l + rho_l * vel_l * (s_l - vel_l) - rho_r * vel_r * (s_r - vel_r))
        / (rho_l * (s_l - vel_l) - rho_r * (s_r - vel_r));

    let f_l = eos.flux(u_l);
    let f_r = eos.flux(u_r);

    if s_l >= R::ZERO {
        f_l
    } else if s_r <= R::ZERO {
        f_r
    } else if s_star >= R::ZERO {
        let coeff = rho_l * (s_l - vel_l) / (s_l - s_star);
        let u_star = Conservative::new(
            coeff,
            coeff * s_star,
            coeff
                * (energy_l / rho_l
                    + (s_star - vel_l) * (s_star + p_l / (rho_l * (s_l - vel_l)))),
        );
        f_l + (u_star - *u_l) * s_l
    } else {
        let coeff = rho_r * (s_r - vel_r) / (s_r - s_star);
        let u_star = Conservative::new(
            coeff,
            coeff * s_star,
            coeff
                * (energy_r / rho_r
                    + (s_star - vel_r) * (s_star + p_r / (rho_r * (s_r - vel_r)))),
        );
        f_r + (u_star - *u_r) * s_r
    }
}
