/// A corner state of the Carnot cycle on the PV diagram.
///
/// Values use the normalized convention `n·R = 1`, so `pressure * volume == temperature`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub volume: f64,
    pub pressure: f64,
    pub temperature: f64,
}

impl StatePoint {
    /// Creates a state from volume and temperature using the ideal gas law.
    pub(super) fn from_volume_and_temperature(volume: f64, temperature: f64) -> Self {
        Self {
            volume,
            pressure: temperature / volume,
            temperature,
        }
    }
}
