//! Initial conditions.
//!
//! Each generator fills the full solution array, ghost cells included,
//! from cell-center coordinates; the boundary rules overwrite the ghosts
//! immediately afterwards.

use crate::equations::EquationOfState;
use crate::mesh::Mesh1D;
use crate::types::{Conservative, Primitive, Real};

/// A constant region for piecewise initial data. Cell membership is
/// half-open: `x_left <= x < x_right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region<R: Real> {
    /// Left edge of the region
    pub x_left: R,
    /// Right edge of the region
    pub x_right: R,
    /// Density
    pub rho: R,
    /// Velocity
    pub u: R,
    /// Pressure
    pub p: R,
}

/// Constant state left of the discontinuity in a shock-entropy setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantState<R: Real> {
    /// Density
    pub rho: R,
    /// Velocity
    pub u: R,
    /// Pressure
    pub p: R,
}

/// Sinusoidal density state right of the discontinuity:
/// rho(x) = rho_base + rho_amplitude * sin(arg), with
/// arg = rho_frequency * pi * x when `use_pi`, else rho_frequency * x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinusoidalState<R: Real> {
    /// Mean density
    pub rho_base: R,
    /// Perturbation amplitude
    pub rho_amplitude: R,
    /// Perturbation frequency
    pub rho_frequency: R,
    /// Scale the argument by pi
    pub use_pi: bool,
    /// Velocity
    pub u: R,
    /// Pressure
    pub p: R,
}

/// Piecewise-constant initial condition over a list of regions.
///
/// The first matching region wins; cells covered by no region default to
/// (rho, u, p) = (1, 0, 1).
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseConstant<R: Real> {
    /// Constant regions, checked in order
    pub regions: Vec<Region<R>>,
}

impl<R: Real> PiecewiseConstant<R> {
    /// Fill `u` from the region list.
    pub fn apply(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>, eos: &EquationOfState<R>) {
        for (i, ui) in u.iter_mut().enumerate() {
            let x = mesh.x(i);

            let mut w = Primitive::new(R::ONE, R::ZERO, R::ONE);
            for region in &self.regions {
                if x >= region.x_left && x < region.x_right {
                    w = Primitive::new(region.rho, region.u, region.p);
                    break;
                }
            }

            *ui = eos.to_conservative(&w);
        }
    }
}

/// Shock-entropy wave interaction (Shu-Osher class): a constant state left
/// of the discontinuity, a sinusoidal density perturbation to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShockEntropy<R: Real> {
    /// Discontinuity position
    pub position: R,
    /// Constant upstream state
    pub left: ConstantState<R>,
    /// Sinusoidal downstream state
    pub right: SinusoidalState<R>,
}

impl<R: Real> ShockEntropy<R> {
    /// Fill `u` from the two-state description.
    pub fn apply(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>, eos: &EquationOfState<R>) {
        for (i, ui) in u.iter_mut().enumerate() {
            let x = mesh.x(i);

            let w = if x < self.position {
                Primitive::new(self.left.rho, self.left.u, self.left.p)
            } else {
                let mut arg = self.right.rho_frequency * x;
                if self.right.use_pi {
                    arg = arg * R::PI;
                }
                let rho = self.right.rho_base + self.right.rho_amplitude * arg.sin();
                Primitive::new(rho, self.right.u, self.right.p)
            };

            *ui = eos.to_conservative(&w);
        }
    }
}

/// Runtime-selected initial condition.
#[derive(Clone, Debug, PartialEq)]
pub enum StandardInitialCondition<R: Real> {
    /// Piecewise-constant regions
    PiecewiseConstant(PiecewiseConstant<R>),
    /// Shock-entropy interaction
    ShockEntropy(ShockEntropy<R>),
}

impl<R: Real> StandardInitialCondition<R> {
    /// Fill `u` with the selected initial condition.
    pub fn apply(&self, u: &mut [Conservative<R>], mesh: &Mesh1D<R>, eos: &EquationOfState<R>) {
        match self {
            Self::PiecewiseConstant(ic) => ic.apply(u, mesh, eos),
            Self::ShockEntropy(ic) => ic.apply(u, mesh, eos),
        }
    }

    /// Initial-condition name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PiecewiseConstant(_) => "piecewise_constant",
            Self::ShockEntropy(_) => "shock_entropy_interaction",
        }
    }
}
