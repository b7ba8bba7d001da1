//! Solver configuration.
//!
//! Typed TOML configuration mirroring the solver's runtime options. All
//! enumerated options deserialize from case-insensitive strings with a few
//! spelling aliases; unknown names are rejected here, before any solver is
//! constructed. Numeric values are parsed as `f64` and narrowed to the
//! working precision at solver construction.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::boundary::StandardBoundary;
use crate::flux::StandardFlux;
use crate::reconstruction::StandardLimiter;
use crate::time::StandardIntegrator;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unrecognized enumerated option value.
    #[error("unknown {field}: {value}")]
    UnknownOption {
        /// Which option was being parsed
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

fn from_str_option<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s = String::deserialize(de)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl FromStr for StandardFlux {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "llf" | "local_lax_friedrichs" => Ok(Self::Llf),
            "rusanov" => Ok(Self::Rusanov),
            "hll" => Ok(Self::Hll),
            "hllc" => Ok(Self::Hllc),
            "movers_le" | "moversle" => Ok(Self::MoversLe),
            _ => Err(ConfigError::UnknownOption {
                field: "flux scheme",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for StandardLimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "none" | "nolimiter" => Ok(Self::None),
            "minmod" => Ok(Self::Minmod),
            "vanleer" | "van_leer" => Ok(Self::VanLeer),
            "superbee" => Ok(Self::Superbee),
            "mc" | "monotonized_central" => Ok(Self::MonotonizedCentral),
            _ => Err(ConfigError::UnknownOption {
                field: "limiter",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for StandardIntegrator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "euler" | "explicit_euler" | "forward_euler" => Ok(Self::ExplicitEuler),
            "ssprk3" | "rk3" | "ssp_rk3" => Ok(Self::SspRk3),
            _ => Err(ConfigError::UnknownOption {
                field: "time integrator",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for StandardBoundary {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "transmissive" | "outflow" | "zero_gradient" => Ok(Self::Transmissive),
            "reflective" | "wall" | "solid_wall" => Ok(Self::Reflective),
            "periodic" => Ok(Self::Periodic),
            _ => Err(ConfigError::UnknownOption {
                field: "boundary type",
                value: s.to_string(),
            }),
        }
    }
}

/// Equation-of-state model selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EosModel {
    /// Ideal gas with constant gamma
    #[default]
    IdealGas,
}

impl FromStr for EosModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "ideal_gas" | "idealgas" => Ok(Self::IdealGas),
            _ => Err(ConfigError::UnknownOption {
                field: "EOS model",
                value: s.to_string(),
            }),
        }
    }
}

/// Initial-condition type selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialConditionKind {
    /// Multiple constant regions
    #[default]
    PiecewiseConstant,
    /// Shock plus sinusoidal entropy wave
    ShockEntropyInteraction,
}

impl FromStr for InitialConditionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "piecewise_constant" | "piecewiseconstant" => Ok(Self::PiecewiseConstant),
            "shock_entropy_interaction" | "shockentropyinteraction" | "shock_entropy"
            | "shu_osher" => Ok(Self::ShockEntropyInteraction),
            _ => Err(ConfigError::UnknownOption {
                field: "initial condition type",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Configuration sections
// =============================================================================

/// Simulation metadata.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Equation system identifier
    pub equations: String,
    /// Case name used for output files
    pub test_name: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            equations: "euler_1d".to_string(),
            test_name: "unnamed".to_string(),
        }
    }
}

/// Mesh section.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Left domain bound
    pub xmin: f64,
    /// Right domain bound
    pub xmax: f64,
    /// Interior cell count
    pub num_cells: usize,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            xmax: 1.0,
            num_cells: 100,
        }
    }
}

/// Time-stepping section.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeConfig {
    /// CFL safety factor
    pub cfl: f64,
    /// Target final time
    pub final_time: f64,
    /// Time integration scheme
    #[serde(rename = "time_integrator", deserialize_with = "from_str_option")]
    pub integrator: StandardIntegrator,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            cfl: 0.5,
            final_time: 1.0,
            integrator: StandardIntegrator::SspRk3,
        }
    }
}

/// Numerical scheme section.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NumericsConfig {
    /// Spatial order: 1 (piecewise constant) or 2 (MUSCL)
    pub order: u32,
    /// Numerical flux scheme
    #[serde(deserialize_with = "from_str_option")]
    pub flux: StandardFlux,
    /// Slope limiter for second order
    #[serde(deserialize_with = "from_str_option")]
    pub limiter: StandardLimiter,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            order: 1,
            flux: StandardFlux::Llf,
            limiter: StandardLimiter::VanLeer,
        }
    }
}

/// Equation-of-state section.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EosConfig {
    /// EOS model
    #[serde(deserialize_with = "from_str_option")]
    pub model: EosModel,
    /// Ratio of specific heats for the ideal gas
    pub gamma: f64,
}

impl Default for EosConfig {
    fn default() -> Self {
        Self {
            model: EosModel::IdealGas,
            gamma: 1.4,
        }
    }
}

/// Boundary-condition section, one rule per side.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Left boundary rule
    #[serde(deserialize_with = "from_str_option")]
    pub left: StandardBoundary,
    /// Right boundary rule
    #[serde(deserialize_with = "from_str_option")]
    pub right: StandardBoundary,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            left: StandardBoundary::Transmissive,
            right: StandardBoundary::Transmissive,
        }
    }
}

/// A constant region of piecewise initial data.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegionConfig {
    /// Left edge
    pub x_left: f64,
    /// Right edge
    pub x_right: f64,
    /// Density
    pub rho: f64,
    /// Velocity
    pub u: f64,
    /// Pressure
    pub p: f64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            x_left: 0.0,
            x_right: 1.0,
            rho: 1.0,
            u: 0.0,
            p: 1.0,
        }
    }
}

/// Constant left state for the shock-entropy initial condition.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConstantStateConfig {
    /// Density
    pub rho: f64,
    /// Velocity
    pub u: f64,
    /// Pressure
    pub p: f64,
}

impl Default for ConstantStateConfig {
    fn default() -> Self {
        Self {
            rho: 1.0,
            u: 0.0,
            p: 1.0,
        }
    }
}

/// Sinusoidal right state for the shock-entropy initial condition.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SinusoidalStateConfig {
    /// Mean density
    pub rho_base: f64,
    /// Perturbation amplitude
    pub rho_amplitude: f64,
    /// Perturbation frequency
    pub rho_frequency: f64,
    /// "pi" scales the sine argument by pi; anything else leaves it plain
    pub rho_function: String,
    /// Velocity
    pub u: f64,
    /// Pressure
    pub p: f64,
}

impl Default for SinusoidalStateConfig {
    fn default() -> Self {
        Self {
            rho_base: 1.0,
            rho_amplitude: 0.0,
            rho_frequency: 0.0,
            rho_function: "pi".to_string(),
            u: 0.0,
            p: 1.0,
        }
    }
}

impl SinusoidalStateConfig {
    /// Whether the sine argument is scaled by pi.
    pub fn use_pi(&self) -> bool {
        self.rho_function.eq_ignore_ascii_case("pi")
    }
}

/// Initial-condition section.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct InitialConditionConfig {
    /// Which generator to use
    #[serde(rename = "type", deserialize_with = "from_str_option")]
    pub kind: InitialConditionKind,

    /// Regions for the piecewise-constant generator
    #[serde(rename = "region")]
    pub regions: Vec<RegionConfig>,

    /// Discontinuity position for the shock-entropy generator
    pub discontinuity_position: f64,
    /// Constant state left of the discontinuity
    pub left_state: ConstantStateConfig,
    /// Sinusoidal state right of the discontinuity
    pub right_state: SinusoidalStateConfig,
}

/// Complete solver configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Simulation metadata
    pub simulation: SimulationConfig,
    /// Mesh geometry
    pub mesh: MeshConfig,
    /// Time stepping
    pub time: TimeConfig,
    /// Numerical schemes
    pub numerics: NumericsConfig,
    /// Equation of state
    pub eos: EosConfig,
    /// Boundary conditions
    #[serde(rename = "boundary_conditions")]
    pub boundary: BoundaryConfig,
    /// Initial condition
    pub initial_condition: InitialConditionConfig,
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
