//! Explicit time integrators.
//!
//! An integrator advances the full conservative state array (ghosts
//! included) by one timestep, given a right-hand-side callback computing
//! the spatial discretization's time derivative. The callback must leave
//! its input untouched and is invoked once per stage.

use crate::types::{Conservative, Real};

/// Explicit time integrator over a conservative state array.
pub trait TimeIntegrator {
    /// Advance `u` in place from t to t + dt.
    ///
    /// `rhs(u_in, du_out)` writes the time derivative of `u_in` into
    /// `du_out`; both slices have the same length as `u`.
    fn advance<R, F>(&self, u: &mut [Conservative<R>], dt: R, rhs: &mut F)
    where
        R: Real,
        F: FnMut(&[Conservative<R>], &mut [Conservative<R>]);

    /// Integrator name for diagnostics.
    fn name(&self) -> &'static str;

    /// Order of accuracy.
    fn order(&self) -> usize;

    /// Number of RHS evaluations per step.
    fn n_stages(&self) -> usize;
}

/// Forward Euler (first order):
///
/// ```text
/// U^{n+1} = U^n + dt * L(U^n)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplicitEuler;

impl TimeIntegrator for ExplicitEuler {
    fn advance<R, F>(&self, u: &mut [Conservative<R>], dt: R, rhs: &mut F)
    where
        R: Real,
        F: FnMut(&[Conservative<R>], &mut [Conservative<R>]),
    {
        let mut du = vec![Conservative::zero(); u.len()];
        rhs(u, &mut du);

        for (ui, dui) in u.iter_mut().zip(&du) {
            *ui += *dui * dt;
        }
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn n_stages(&self) -> usize {
        1
    }
}

/// Strong stability preserving Runge-Kutta 3 (Shu-Osher form):
///
/// ```text
/// U^(1)   = U^n + dt * L(U^n)
/// U^(2)   = 3/4 U^n + 1/4 U^(1) + 1/4 dt * L(U^(1))
/// U^{n+1} = 1/3 U^n + 2/3 U^(2) + 2/3 dt * L(U^(2))
/// ```
///
/// Third order; preserves the TVD property of a TVD spatial operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SspRk3;

impl TimeIntegrator for SspRk3 {
    fn advance<R, F>(&self, u: &mut [Conservative<R>], dt: R, rhs: &mut F)
    where
        R: Real,
        F: FnMut(&[Conservative<R>], &mut [Conservative<R>]),
    {
        let n = u.len();
        let quarter = R::from_f64_lossy(0.25);
        let three_quarters = R::from_f64_lossy(0.75);
        let third = R::from_f64_lossy(1.0 / 3.0);
        let two_thirds = R::from_f64_lossy(2.0 / 3.0);

        let u_n = u.to_vec();
        let mut du = vec![Conservative::zero(); n];

        // Stage 1
        rhs(&u_n, &mut du);
        let mut u1: Vec<Conservative<R>> = (0..n).map(|i| u_n[i] + du[i] * dt).collect();

        // Stage 2
        rhs(&u1, &mut du);
        for i in 0..n {
            u1[i] = u_n[i] * three_quarters + u1[i] * quarter + du[i] * (quarter * dt);
        }

        // Stage 3
        rhs(&u1, &mut du);
        for i in 0..n {
            u[i] = u_n[i] * third + u1[i] * two_thirds + du[i] * (two_thirds * dt);
        }
    }

    fn name(&self) -> &'static str {
        "ssprk3"
    }

    fn order(&self) -> usize {
        3
    }

    fn n_stages(&self) -> usize {
        3
    }
}

/// Runtime-selected time integrator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardIntegrator {
    /// Forward Euler
    ExplicitEuler,
    /// SSP-RK3 (default)
    #[default]
    SspRk3,
}

impl TimeIntegrator for StandardIntegrator {
    fn advance<R, F>(&self, u: &mut [Conservative<R>], dt: R, rhs: &mut F)
    where
        R: Real,
        F: FnMut(&[Conservative<R>], &mut [Conservative<R>]),
    {
        match self {
            Self::ExplicitEuler => ExplicitEuler.advance(u, dt, rhs),
            Self::SspRk3 => SspRk3.advance(u, dt, rhs),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ExplicitEuler => ExplicitEuler.name(),
            Self::SspRk3 => SspRk3.name(),
        }
    }

    fn order(&self) -> usize {
        match self {
            Self::ExplicitEuler => ExplicitEuler.order(),
            Self::SspRk3 => SspRk3.order(),
        }
    }

    fn n_stages(&self) -> usize {
        match self {
            Self::ExplicitEuler => ExplicitEuler.n_stages(),
            Self::SspRk3 => SspRk3.n_stages(),
        }
    }
}
