//! Compile-time precision selection.
//!
//! Every component of the solver is generic over a scalar type implementing
//! [`Real`], so the choice between `f32` and `f64` is made once at the top
//! level and propagated structurally. The trait is sealed: only `f32` and
//! `f64` implement it.

use std::fmt::{Debug, Display, LowerExp};
use std::iter::Sum;

use num_traits::{Float, FromPrimitive, NumAssign};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar type for all physical and numerical quantities.
///
/// Use as a generic bound (`<R: Real>`), never as a trait object. The
/// associated constants provide the handful of literals the numerics need
/// without sprinkling `from_f64` conversions through hot loops.
pub trait Real:
    private::Sealed
    + Float
    + FromPrimitive
    + NumAssign
    + Sum
    + Copy
    + Debug
    + Display
    + LowerExp
    + Default
    + Send
    + Sync
    + 'static
{
    /// Zero.
    const ZERO: Self;

    /// One.
    const ONE: Self;

    /// Two.
    const TWO: Self;

    /// One half.
    const HALF: Self;

    /// Pi.
    const PI: Self;

    /// Small number guarding divisions and degenerate slope ratios.
    ///
    /// Precision-dependent: 1e-14 in double precision, 1e-7 in single.
    const EPSILON: Self;

    /// Convert from an `f64` configuration value (lossy for `f32`).
    fn from_f64_lossy(v: f64) -> Self;

    /// Widen to `f64` for reporting and cross-module interfaces.
    fn into_f64(self) -> f64;
}

impl Real for f32 {
    const ZERO: f32 = 0.0;
    const ONE: f32 = 1.0;
    const TWO: f32 = 2.0;
    const HALF: f32 = 0.5;
    const PI: f32 = std::f32::consts::PI;
    const EPSILON: f32 = 1.0e-7;

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const TWO: f64 = 2.0;
    const HALF: f64 = 0.5;
    const PI: f64 = std::f64::consts::PI;
    const EPSILON: f64 = 1.0e-14;

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}
