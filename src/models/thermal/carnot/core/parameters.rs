/// Fixed gas and geometry parameters of a Carnot cycle.
///
/// The reservoir temperatures vary from cycle to cycle, while these values
/// usually stay put. The defaults describe a diatomic ideal gas
/// (`gamma = 1.4`) expanding isothermally from `V1 = 1` to `V2 = 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleParameters {
    /// Adiabatic index (ratio of specific heats), must be greater than one.
    pub gamma: f64,

    /// Volume at state 1, the start of the isothermal expansion.
    pub v1: f64,

    /// Volume at state 2, the end of the isothermal expansion.
    pub v2: f64,
}

impl Default for CycleParameters {
    fn default() -> Self {
        Self {
            gamma: 1.4,
            v1: 1.0,
            v2: 2.0,
        }
    }
}

impl CycleParameters {
    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Replaces the isothermal expansion volumes `V1` and `V2`.
    #[must_use]
    pub fn with_volumes(mut self, v1: f64, v2: f64) -> Self {
        self.v1 = v1;
        self.v2 = v2;
        self
    }
}
