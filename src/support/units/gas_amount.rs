use uom::si::{
    f64::{Energy, HeatCapacity, Pressure, TemperatureInterval, Volume},
    temperature_interval::kelvin as delta_kelvin,
    volume::cubic_meter,
};

/// Amount of ideal gas expressed as `n·R`, J/K in SI.
pub type GasAmount = HeatCapacity;

/// Extension trait for scaling normalized values by a [`GasAmount`].
///
/// Values computed with `n·R = 1` carry temperature units: an energy is
/// `n·R` times a temperature interval, and a pressure is `n·R` times a
/// temperature per volume.
/// Volumes are taken to be in cubic meters.
pub trait ScaleByGasAmount {
    /// Returns the energy `n·R · value` for a normalized energy in kelvin.
    fn energy(self, normalized: f64) -> Energy;

    /// Returns the pressure `n·R · value` for a normalized pressure in K/m³.
    fn pressure(self, normalized: f64) -> Pressure;
}

impl ScaleByGasAmount for GasAmount {
    fn energy(self, normalized: f64) -> Energy {
        self * TemperatureInterval::new::<delta_kelvin>(normalized)
    }

    fn pressure(self, normalized: f64) -> Pressure {
        self.energy(normalized) / Volume::new::<cubic_meter>(1.0)
    }
}
