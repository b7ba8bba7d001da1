//! Factory functions translating configuration into solver components.
//!
//! The flux, limiter, boundary, and integrator selections deserialize
//! directly as their dispatch enums; only the components carrying numeric
//! data need a precision-narrowing build step.

use crate::config::{EosConfig, EosModel, InitialConditionConfig, InitialConditionKind};
use crate::equations::EquationOfState;
use crate::initial::{
    ConstantState, PiecewiseConstant, Region, ShockEntropy, SinusoidalState,
    StandardInitialCondition,
};
use crate::types::Real;

/// Build the equation of state from its configuration section.
pub fn create_eos<R: Real>(config: &EosConfig) -> EquationOfState<R> {
    match config.model {
        EosModel::IdealGas => EquationOfState::ideal_gas(R::from_f64_lossy(config.gamma)),
    }
}

/// Build the initial condition from its configuration section.
pub fn create_initial_condition<R: Real>(
    config: &InitialConditionConfig,
) -> StandardInitialCondition<R> {
    match config.kind {
        InitialConditionKind::PiecewiseConstant => {
            let regions = config
                .regions
                .iter()
                .map(|r| Region {
                    x_left: R::from_f64_lossy(r.x_left),
                    x_right: R::from_f64_lossy(r.x_right),
                    rho: R::from_f64_lossy(r.rho),
                    u: R::from_f64_lossy(r.u),
                    p: R::from_f64_lossy(r.p),
                })
                .collect();
            StandardInitialCondition::PiecewiseConstant(PiecewiseConstant { regions })
        }
        InitialConditionKind::ShockEntropyInteraction => {
            let left = ConstantState {
                rho: R::from_f64_lossy(config.left_state.rho),
                u: R::from_f64_lossy(config.left_state.u),
                p: R::from_f64_lossy(config.left_state.p),
            };
            let right = SinusoidalState {
                rho_base: R::from_f64_lossy(config.right_state.rho_base),
                rho_amplitude: R::from_f64_lossy(config.right_state.rho_amplitude),
                rho_frequency: R::from_f64_lossy(config.right_state.rho_frequency),
                use_pi: config.right_state.use_pi(),
                u: R::from_f64_lossy(config.right_state.u),
                p: R::from_f64_lossy(config.right_state.p),
            };
            StandardInitialCondition::ShockEntropy(ShockEntropy {
                position: R::from_f64_lossy(config.discontinuity_position),
                left,
                right,
            })
        }
    }
}
