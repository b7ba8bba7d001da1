//! HLL (Harten-Lax-van Leer) approximate Riemann solver.
//!
//! Two-wave approximation with Davis wave-speed estimates. Robust for
//! strong shocks, but smears contact discontinuities; see
//! [`hllc_flux`](super::hllc_flux) for the contact-restoring variant.
//!
//! ```text
//! F* = (S_R F_L - S_L F_R + S_L S_R (U_R - U_L)) / (S_R - S_L)
//! ```
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid
//! Dynamics", ch. 10.

use crate::equations::EquationOfState;
use crate::types::{Conservative, Real};

/// HLL numerical flux with Davis wave-speed estimates.
pub fn hll_flux<R: Real>(
    u_l: &Conservative<R>,
    u_r: &Conservative<R>,
    eos: &EquationOfState<R>,
) -> Conservative<R> {
    let vel_l = u_l.rho_u / u_l.rho;
    let vel_r = u_r.rho_u / u_r.rho;
    let c_l = eos.sound_speed_cons(u_l);
    let c_r = eos.sound_speed_cons(u_r);

    // Davis estimates: fastest left- and right-running characteristics
    let s_l = (vel_l - c_l).min(vel_r - c_r);
    let s_r = (vel_l + c_l).max(vel_r + c_r);

    let f_l = eos.flux(u_l);
    let f_r = eos.flux(u_r);

    if s_l >= R::ZERO {
        // All waves run right: upwind is the left state
        f_l
    } else if s_r <= R::ZERO {
        // All waves run left: upwind is the right state
        f_r
    } else {
        (f_l * s_r - f_r * s_l + (*u_r - *u_l) * (s_l * s_r)) / (s_r - s_l)
    }
}
