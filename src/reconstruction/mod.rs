//! Slope-limited reconstruction of interface states.

mod limiter;
mod muscl;

pub use limiter::{
    Minmod, MonotonizedCentral, NoLimiter, SlopeLimiter, StandardLimiter, Superbee, VanLeer,
};
pub use muscl::{reconstruct_first_order, reconstruct_muscl};
