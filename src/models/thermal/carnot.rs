//! Ideal Carnot heat engine model.
//!
//! [`CarnotEngine`] is the [`twine_core::Model`] adapter: it takes reservoir
//! temperatures as [`uom`] quantities and reports efficiency, work, and heat
//! flows in physical units.
//! The computation itself lives in [`CarnotCycle`], which works in plain `f64`
//! with the gas amount normalized to one and can be used directly for
//! plotting PV diagrams.

mod core;

pub use self::core::{
    CarnotCycle, Curves, CycleParameters, DEFAULT_SAMPLES, InvalidParameterError, Process,
    ProcessCurve, StatePoint,
};

use twine_core::Model;
use uom::si::{
    f64::{Energy, HeatCapacity, Pressure, Ratio, ThermodynamicTemperature, Volume},
    heat_capacity::joule_per_kelvin,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalUpperOpen},
    units::{GasAmount, ScaleByGasAmount},
};

/// Reservoir temperatures for one evaluation of a [`CarnotEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotInput {
    pub t_hot: ThermodynamicTemperature,
    pub t_cold: ThermodynamicTemperature,
}

/// Performance of a Carnot engine between two reservoirs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotOutput {
    /// Thermal efficiency, `1 - T_cold/T_hot`.
    pub efficiency: Constrained<Ratio, UnitIntervalUpperOpen>,

    /// Net work done per cycle.
    pub work: Energy,

    /// Heat absorbed from the hot reservoir per cycle.
    pub heat_absorbed: Energy,

    /// Heat rejected to the cold reservoir per cycle.
    pub heat_rejected: Energy,

    /// Largest volume reached during the cycle (state 3).
    pub max_volume: Volume,

    /// Highest pressure reached during the cycle (state 1).
    pub peak_pressure: Pressure,

    /// The underlying normalized cycle, for sampling PV curves.
    pub cycle: CarnotCycle,
}

/// An ideal gas Carnot engine with fixed gas and geometry parameters.
///
/// Volumes in [`CycleParameters`] are interpreted in cubic meters.
/// The default gas amount `n·R` is 1 J/K, which makes energies in joules
/// numerically equal to the normalized values reported by [`CarnotCycle`].
///
/// # Example
///
/// ```
/// use carnot_models::models::thermal::carnot::{CarnotEngine, CarnotInput};
/// use twine_core::Model;
/// use uom::si::{energy::joule, f64::ThermodynamicTemperature, ratio::percent, thermodynamic_temperature::kelvin};
///
/// let engine = CarnotEngine::default();
/// let output = engine
///     .call(&CarnotInput {
///         t_hot: ThermodynamicTemperature::new::<kelvin>(600.0),
///         t_cold: ThermodynamicTemperature::new::<kelvin>(300.0),
///     })
///     .unwrap();
///
/// assert!((output.efficiency.as_ref().get::<percent>() - 50.0).abs() < 1e-12);
/// assert!((output.work.get::<joule>() - 300.0 * 2.0_f64.ln()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotEngine {
    parameters: CycleParameters,
    gas_amount: GasAmount,
}

impl Default for CarnotEngine {
    fn default() -> Self {
        Self {
            parameters: CycleParameters::default(),
            gas_amount: HeatCapacity::new::<joule_per_kelvin>(1.0),
        }
    }
}

impl CarnotEngine {
    /// Returns a copy of this engine using different gas and geometry parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: CycleParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns a copy of this engine holding a different amount of gas, given as `n·R`.
    #[must_use]
    pub fn with_gas_amount(mut self, gas_amount: Constrained<GasAmount, StrictlyPositive>) -> Self {
        self.gas_amount = gas_amount.into_inner();
        self
    }

    #[must_use]
    pub fn parameters(&self) -> CycleParameters {
        self.parameters
    }

    #[must_use]
    pub fn gas_amount(&self) -> GasAmount {
        self.gas_amount
    }
}

impl Model for CarnotEngine {
    type Input = CarnotInput;
    type Output = CarnotOutput;
    type Error = InvalidParameterError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let cycle = CarnotCycle::with_parameters(
            input.t_hot.get::<kelvin>(),
            input.t_cold.get::<kelvin>(),
            self.parameters,
        )?;

        let efficiency = UnitIntervalUpperOpen::new(Ratio::new::<ratio>(cycle.efficiency()))?;
        let [peak, ..] = cycle.states();

        Ok(CarnotOutput {
            efficiency,
            work: self.gas_amount.energy(cycle.work()),
            heat_absorbed: self.gas_amount.energy(cycle.heat_absorbed()),
            heat_rejected: self.gas_amount.energy(cycle.heat_rejected()),
            max_volume: Volume::new::<cubic_meter>(cycle.v3()),
            peak_pressure: self.gas_amount.pressure(peak.pressure),
            cycle,
        })
    }
}
