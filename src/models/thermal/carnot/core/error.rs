use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when a Carnot cycle cannot be built or sampled.
///
/// Every variant describes a violated precondition and carries the offending
/// values. Construction checks all preconditions before deriving any state,
/// so a failed construction never yields a partially populated cycle.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidParameterError {
    /// An input or derived value is NaN or infinite.
    #[error("non-finite value for {what}: {value}")]
    NonFinite {
        /// Name of the offending parameter or derived quantity.
        what: &'static str,
        value: f64,
    },

    /// The cold reservoir temperature is zero or negative.
    #[error("cold reservoir temperature must be positive: t_cold={t_cold}")]
    ColdTemperature { t_cold: f64 },

    /// The hot reservoir is not hotter than the cold reservoir.
    #[error("hot reservoir must be hotter than cold reservoir: t_hot={t_hot}, t_cold={t_cold}")]
    TemperatureOrder { t_hot: f64, t_cold: f64 },

    /// The reservoirs are so far apart that the efficiency rounds to one.
    #[error("reservoir temperature ratio too large to resolve efficiency: t_hot={t_hot}, t_cold={t_cold}")]
    TemperatureRatio { t_hot: f64, t_cold: f64 },

    /// The adiabatic index is not greater than one.
    #[error("adiabatic index must be greater than one: gamma={gamma}")]
    AdiabaticIndex { gamma: f64 },

    /// The state 1 reference volume is zero or negative.
    #[error("reference volume must be positive: v1={v1}")]
    Volume { v1: f64 },

    /// The isothermal expansion does not expand.
    #[error("isothermal expansion requires v2 > v1: v1={v1}, v2={v2}")]
    VolumeOrder { v1: f64, v2: f64 },

    /// Fewer than two samples were requested per process curve.
    #[error("each process curve needs at least 2 samples: n={n}")]
    SampleCount { n: usize },

    /// A derived value fell outside its admissible range.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}
