//! TVD slope limiters for MUSCL reconstruction.
//!
//! Each limiter is a pure scalar function phi(r) of the ratio of
//! consecutive undivided differences. phi = 0 falls back to first order,
//! phi(1) = 1 recovers the full linear slope in smooth regions. Every
//! limiter here stays inside the second-order TVD region
//! 0 <= phi(r) <= min(2r, 2) for r >= 0.
//!
//! Reference: Sweby, "High resolution schemes using flux limiters for
//! hyperbolic conservation laws", SIAM J. Numer. Anal. 21 (1984).

use crate::types::Real;

/// Scalar slope-limiter function.
pub trait SlopeLimiter {
    /// Evaluate phi(r) for the slope ratio `r`.
    fn phi<R: Real>(&self, r: R) -> R;

    /// Limiter name for diagnostics.
    fn name(&self) -> &'static str;
}

/// No limiting: phi(r) = 0, piecewise-constant slopes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoLimiter;

impl SlopeLimiter for NoLimiter {
    #[inline]
    fn phi<R: Real>(&self, _r: R) -> R {
        R::ZERO
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Minmod: phi(r) = max(0, min(1, r)). The most diffusive TVD limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minmod;

impl SlopeLimiter for Minmod {
    #[inline]
    fn phi<R: Real>(&self, r: R) -> R {
        r.min(R::ONE).max(R::ZERO)
    }

    fn name(&self) -> &'static str {
        "minmod"
    }
}

/// Van Leer: phi(r) = (r + |r|) / (1 + |r|). Smooth and symmetric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VanLeer;

impl SlopeLimiter for VanLeer {
    #[inline]
    fn phi<R: Real>(&self, r: R) -> R {
        (r + r.abs()) / (R::ONE + r.abs())
    }

    fn name(&self) -> &'static str {
        "vanleer"
    }
}

/// Superbee: phi(r) = max(0, min(2r, 1), min(r, 2)). Least diffusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Superbee;

impl SlopeLimiter for Superbee {
    #[inline]
    fn phi<R: Real>(&self, r: R) -> R {
        let a = (R::TWO * r).min(R::ONE);
        let b = r.min(R::TWO);
        a.max(b).max(R::ZERO)
    }

    fn name(&self) -> &'static str {
        "superbee"
    }
}

/// Monotonized central: phi(r) = max(0, min(2r, (1+r)/2, 2)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonotonizedCentral;

impl SlopeLimiter for MonotonizedCentral {
    #[inline]
    fn phi<R: Real>(&self, r: R) -> R {
        let central = (R::ONE + r) * R::HALF;
        (R::TWO * r).min(central).min(R::TWO).max(R::ZERO)
    }

    fn name(&self) -> &'static str {
        "mc"
    }
}

/// Enum wrapper over the built-in limiters for runtime selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardLimiter {
    /// No limiting (first order)
    None,
    /// Minmod
    Minmod,
    /// Van Leer (default)
    #[default]
    VanLeer,
    /// Superbee
    Superbee,
    /// Monotonized central
    MonotonizedCentral,
}

impl StandardLimiter {
    /// Evaluate phi(r) for the selected limiter.
    #[inline]
    pub fn phi<R: Real>(&self, r: R) -> R {
        match self {
            Self::None => NoLimiter.phi(r),
            Self::Minmod => Minmod.phi(r),
            Self::VanLeer => VanLeer.phi(r),
            Self::Superbee => Superbee.phi(r),
            Self::MonotonizedCentral => MonotonizedCentral.phi(r),
        }
    }

    /// Limiter name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => NoLimiter.name(),
            Self::Minmod => Minmod.name(),
            Self::VanLeer => VanLeer.name(),
            Self::Superbee => Superbee.name(),
            Self::MonotonizedCentral => MonotonizedCentral.name(),
        }
    }
}
