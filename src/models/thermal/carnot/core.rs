//! Closed-form ideal Carnot cycle.
//!
//! A Carnot cycle runs an ideal gas between two reservoirs through two
//! isotherms and two adiabats:
//!
//! ```text
//!   1 → 2  isothermal expansion at T_hot
//!   2 → 3  adiabatic expansion,  T·V^(γ-1) = const
//!   3 → 4  isothermal compression at T_cold
//!   4 → 1  adiabatic compression, T·V^(γ-1) = const
//! ```
//!
//! Volumes `V1` and `V2` are given; `V3` and `V4` follow from the adiabats:
//! `V3 = V2·r` and `V4 = V1·r` with `r = (T_hot/T_cold)^(1/(γ-1))`.
//!
//! # Units
//!
//! Everything here is a plain `f64` in a normalized convention where the
//! gas amount `n·R` is one, so the ideal gas law reads `P·V = T` and energies
//! carry the units of temperature.
//! The `twine_core::Model` adapter in the parent module attaches physical units.

mod curve;
mod error;
mod parameters;
mod state;

pub use curve::{Curves, DEFAULT_SAMPLES, Process, ProcessCurve};
pub use error::InvalidParameterError;
pub use parameters::CycleParameters;
pub use state::StatePoint;

use tracing::{debug, trace};

use crate::support::constraint::{StrictlyPositive, UnitIntervalUpperOpen};

use curve::linspace;

/// An ideal Carnot cycle with all four corner states derived.
///
/// A cycle is immutable once built.
/// Evaluating different reservoir temperatures means building a new cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotCycle {
    t_hot: f64,
    t_cold: f64,
    gamma: f64,
    v1: f64,
    v2: f64,
    v3: f64,
    v4: f64,
}

impl CarnotCycle {
    /// Builds a cycle between two reservoirs using [`CycleParameters::default`].
    ///
    /// # Example
    ///
    /// ```
    /// use carnot_models::models::thermal::carnot::CarnotCycle;
    ///
    /// let cycle = CarnotCycle::new(600.0, 300.0).unwrap();
    /// assert_eq!(cycle.efficiency(), 0.5);
    /// assert!(cycle.v3() > cycle.v4());
    ///
    /// assert!(CarnotCycle::new(300.0, 310.0).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidParameterError`] if `t_hot > t_cold > 0` does not hold.
    pub fn new(t_hot: f64, t_cold: f64) -> Result<Self, InvalidParameterError> {
        Self::with_parameters(t_hot, t_cold, CycleParameters::default())
    }

    /// Builds a cycle between two reservoirs with explicit gas and geometry parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidParameterError`] if any input is not finite, if
    /// `t_hot > t_cold > 0`, `gamma > 1`, or `v2 > v1 > 0` does not hold, if
    /// `t_hot/t_cold` is so large that the efficiency rounds to one, or if
    /// the derived volumes overflow.
    pub fn with_parameters(
        t_hot: f64,
        t_cold: f64,
        parameters: CycleParameters,
    ) -> Result<Self, InvalidParameterError> {
        let result = Self::derive(t_hot, t_cold, parameters);

        match &result {
            Ok(cycle) => debug!(
                t_hot,
                t_cold,
                gamma = cycle.gamma,
                v3 = cycle.v3,
                v4 = cycle.v4,
                "derived carnot cycle states"
            ),
            Err(error) => debug!(
                t_hot,
                t_cold,
                gamma = parameters.gamma,
                v1 = parameters.v1,
                v2 = parameters.v2,
                %error,
                "rejected carnot cycle parameters"
            ),
        }

        result
    }

    fn derive(
        t_hot: f64,
        t_cold: f64,
        parameters: CycleParameters,
    ) -> Result<Self, InvalidParameterError> {
        let CycleParameters { gamma, v1, v2 } = parameters;

        ensure_finite(t_hot, "t_hot")?;
        ensure_finite(t_cold, "t_cold")?;
        ensure_finite(gamma, "gamma")?;
        ensure_finite(v1, "v1")?;
        ensure_finite(v2, "v2")?;

        require_positive(t_cold, InvalidParameterError::ColdTemperature { t_cold })?;
        require_positive(
            t_hot - t_cold,
            InvalidParameterError::TemperatureOrder { t_hot, t_cold },
        )?;
        UnitIntervalUpperOpen::new(1.0 - t_cold / t_hot)
            .map_err(|_| InvalidParameterError::TemperatureRatio { t_hot, t_cold })?;
        require_positive(gamma - 1.0, InvalidParameterError::AdiabaticIndex { gamma })?;
        require_positive(v1, InvalidParameterError::Volume { v1 })?;
        require_positive(v2 - v1, InvalidParameterError::VolumeOrder { v1, v2 })?;

        // Both adiabats scale volume by the same factor: T·V^(γ-1) = const.
        let ratio = (t_hot / t_cold).powf((gamma - 1.0).recip());
        let v3 = ensure_finite(v2 * ratio, "v3")?;
        let v4 = ensure_finite(v1 * ratio, "v4")?;

        Ok(Self {
            t_hot,
            t_cold,
            gamma,
            v1,
            v2,
            v3,
            v4,
        })
    }

    /// Hot reservoir temperature.
    #[must_use]
    pub fn t_hot(&self) -> f64 {
        self.t_hot
    }

    /// Cold reservoir temperature.
    #[must_use]
    pub fn t_cold(&self) -> f64 {
        self.t_cold
    }

    /// Adiabatic index.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Volume at state 1, the start of the isothermal expansion.
    #[must_use]
    pub fn v1(&self) -> f64 {
        self.v1
    }

    /// Volume at state 2, the end of the isothermal expansion.
    #[must_use]
    pub fn v2(&self) -> f64 {
        self.v2
    }

    /// Volume at state 3, the end of the adiabatic expansion.
    ///
    /// This is the largest volume reached during the cycle.
    #[must_use]
    pub fn v3(&self) -> f64 {
        self.v3
    }

    /// Volume at state 4, the end of the isothermal compression.
    #[must_use]
    pub fn v4(&self) -> f64 {
        self.v4
    }

    /// Volume scaling factor of both adiabats, `V3/V2 == V4/V1`.
    #[must_use]
    pub fn volume_ratio(&self) -> f64 {
        self.v3 / self.v2
    }

    /// Ratio of the largest to the smallest volume in the cycle, `V3/V1`.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        self.v3 / self.v1
    }

    /// Thermal efficiency, `1 - T_cold/T_hot`.
    ///
    /// Returns zero for a zero hot reservoir temperature instead of dividing by zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn efficiency(&self) -> f64 {
        if self.t_hot == 0.0 {
            return 0.0;
        }
        1.0 - self.t_cold / self.t_hot
    }

    /// Net work done by the gas per cycle, `(T_hot - T_cold)·ln(V2/V1)`.
    ///
    /// This is the area enclosed by the cycle on the PV diagram.
    #[must_use]
    pub fn work(&self) -> f64 {
        (self.t_hot - self.t_cold) * self.expansion_log()
    }

    /// Heat absorbed from the hot reservoir during `1→2`, `T_hot·ln(V2/V1)`.
    #[must_use]
    pub fn heat_absorbed(&self) -> f64 {
        self.t_hot * self.expansion_log()
    }

    /// Heat rejected to the cold reservoir during `3→4`.
    ///
    /// Computed from the first law over the closed cycle as
    /// [`heat_absorbed`](Self::heat_absorbed) minus [`work`](Self::work).
    #[must_use]
    pub fn heat_rejected(&self) -> f64 {
        self.heat_absorbed() - self.work()
    }

    /// Returns the four corner states in cycle order 1, 2, 3, 4.
    #[must_use]
    pub fn states(&self) -> [StatePoint; 4] {
        [
            StatePoint::from_volume_and_temperature(self.v1, self.t_hot),
            StatePoint::from_volume_and_temperature(self.v2, self.t_hot),
            StatePoint::from_volume_and_temperature(self.v3, self.t_cold),
            StatePoint::from_volume_and_temperature(self.v4, self.t_cold),
        ]
    }

    /// Returns the volumes where a process starts and ends.
    #[must_use]
    pub fn volume_span(&self, process: Process) -> (f64, f64) {
        match process {
            Process::IsothermalExpansion => (self.v1, self.v2),
            Process::AdiabaticExpansion => (self.v2, self.v3),
            Process::IsothermalCompression => (self.v3, self.v4),
            Process::AdiabaticCompression => (self.v4, self.v1),
        }
    }

    /// Evaluates the pressure on a process path at the given volume.
    ///
    /// Isotherms follow `P = T/V`.
    /// Adiabats follow `P = C/V^γ`, with `C` fixed by the isotherm they leave from,
    /// so the path is continuous at the shared corner.
    #[must_use]
    pub fn pressure_on(&self, process: Process, volume: f64) -> f64 {
        match process {
            Process::IsothermalExpansion => self.t_hot / volume,
            Process::AdiabaticExpansion => {
                let c_exp = self.t_hot * self.v2.powf(self.gamma - 1.0);
                c_exp / volume.powf(self.gamma)
            }
            Process::IsothermalCompression => self.t_cold / volume,
            Process::AdiabaticCompression => {
                let c_comp = self.t_cold * self.v4.powf(self.gamma - 1.0);
                c_comp / volume.powf(self.gamma)
            }
        }
    }

    /// Samples pressure-volume curves for all four processes.
    ///
    /// Each curve holds `n` points with volumes evenly spaced from the start
    /// to the end of the process.
    /// The result depends only on the cycle and `n`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::SampleCount`] if `n < 2`.
    pub fn curves(&self, n: usize) -> Result<Curves, InvalidParameterError> {
        if n < 2 {
            let error = InvalidParameterError::SampleCount { n };
            debug!(n, %error, "rejected curve sample count");
            return Err(error);
        }

        trace!(n, t_hot = self.t_hot, t_cold = self.t_cold, "sampling process curves");
        Ok(Process::ALL.map(|process| self.sample(process, n)))
    }

    /// Samples curves with [`DEFAULT_SAMPLES`] points per process.
    #[must_use]
    pub fn default_curves(&self) -> Curves {
        Process::ALL.map(|process| self.sample(process, DEFAULT_SAMPLES))
    }

    fn sample(&self, process: Process, n: usize) -> ProcessCurve {
        let (start, end) = self.volume_span(process);
        let volumes = linspace(start, end, n);
        let pressures = volumes
            .iter()
            .map(|&volume| self.pressure_on(process, volume))
            .collect();

        ProcessCurve {
            process,
            volumes,
            pressures,
        }
    }

    fn expansion_log(&self) -> f64 {
        (self.v2 / self.v1).ln()
    }
}

fn ensure_finite(value: f64, what: &'static str) -> Result<f64, InvalidParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidParameterError::NonFinite { what, value })
    }
}

fn require_positive(
    value: f64,
    violation: InvalidParameterError,
) -> Result<(), InvalidParameterError> {
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|_| violation)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_continuous(curves: &Curves) {
        for (leg, next) in curves.iter().zip(curves.iter().cycle().skip(1)) {
            let (v_end, p_end) = leg.last().unwrap();
            let (v_start, p_start) = next.first().unwrap();
            assert_relative_eq!(v_end, v_start);
            assert_relative_eq!(p_end, p_start, max_relative = 1e-9);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn standard_cycle() {
        let cycle = CarnotCycle::new(600.0, 300.0).unwrap();

        assert_eq!(cycle.efficiency(), 0.5);
        assert_relative_eq!(cycle.volume_ratio(), 2.0_f64.powf(2.5), epsilon = 1e-12);
        assert_relative_eq!(cycle.volume_ratio(), 5.656_854, epsilon = 1e-6);
        assert_relative_eq!(cycle.v3(), 11.313_708, epsilon = 1e-6);
        assert_relative_eq!(cycle.v4(), 5.656_854, epsilon = 1e-6);
        assert_relative_eq!(cycle.compression_ratio(), cycle.v3());
        assert_relative_eq!(cycle.work(), 300.0 * 2.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(cycle.work(), 207.944_154, epsilon = 1e-6);
        assert_relative_eq!(cycle.heat_absorbed(), 600.0 * 2.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(cycle.heat_rejected(), 300.0 * 2.0_f64.ln(), epsilon = 1e-9);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn accessors_echo_inputs() {
        let params = CycleParameters::default()
            .with_gamma(5.0 / 3.0)
            .with_volumes(0.5, 1.5);
        let cycle = CarnotCycle::with_parameters(900.0, 400.0, params).unwrap();

        assert_eq!(cycle.t_hot(), 900.0);
        assert_eq!(cycle.t_cold(), 400.0);
        assert_eq!(cycle.gamma(), 5.0 / 3.0);
        assert_eq!(cycle.v1(), 0.5);
        assert_eq!(cycle.v2(), 1.5);

        // Monatomic gas: r = (T_hot/T_cold)^1.5
        let ratio = 2.25_f64.powf(1.5);
        assert_relative_eq!(cycle.v3(), 1.5 * ratio, epsilon = 1e-12);
        assert_relative_eq!(cycle.v4(), 0.5 * ratio, epsilon = 1e-12);
    }

    #[test]
    fn adiabats_conserve_t_v_gamma_minus_one() {
        let cycle = CarnotCycle::new(1200.0, 350.0).unwrap();
        let g1 = cycle.gamma() - 1.0;

        assert_relative_eq!(
            cycle.t_hot() * cycle.v2().powf(g1),
            cycle.t_cold() * cycle.v3().powf(g1),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            cycle.t_hot() * cycle.v1().powf(g1),
            cycle.t_cold() * cycle.v4().powf(g1),
            max_relative = 1e-12
        );
        assert_relative_eq!(cycle.v4() / cycle.v1(), cycle.volume_ratio(), max_relative = 1e-12);
    }

    #[test]
    fn hot_not_hotter_than_cold() {
        assert_eq!(
            CarnotCycle::new(300.0, 310.0),
            Err(InvalidParameterError::TemperatureOrder {
                t_hot: 300.0,
                t_cold: 310.0
            })
        );
        assert!(matches!(
            CarnotCycle::new(300.0, 300.0),
            Err(InvalidParameterError::TemperatureOrder { .. })
        ));
    }

    #[test]
    fn cold_temperature_must_be_positive() {
        assert_eq!(
            CarnotCycle::new(300.0, 0.0),
            Err(InvalidParameterError::ColdTemperature { t_cold: 0.0 })
        );
        assert!(matches!(
            CarnotCycle::new(300.0, -10.0),
            Err(InvalidParameterError::ColdTemperature { .. })
        ));
    }

    #[test]
    fn gamma_must_exceed_one() {
        let unity = CycleParameters::default().with_gamma(1.0);
        assert_eq!(
            CarnotCycle::with_parameters(500.0, 250.0, unity),
            Err(InvalidParameterError::AdiabaticIndex { gamma: 1.0 })
        );

        let below = CycleParameters::default().with_gamma(0.8);
        assert!(matches!(
            CarnotCycle::with_parameters(500.0, 250.0, below),
            Err(InvalidParameterError::AdiabaticIndex { .. })
        ));
    }

    #[test]
    fn volumes_must_expand_from_positive() {
        let reversed = CycleParameters::default().with_volumes(2.0, 1.0);
        assert_eq!(
            CarnotCycle::with_parameters(500.0, 250.0, reversed),
            Err(InvalidParameterError::VolumeOrder { v1: 2.0, v2: 1.0 })
        );

        let equal = CycleParameters::default().with_volumes(1.0, 1.0);
        assert!(matches!(
            CarnotCycle::with_parameters(500.0, 250.0, equal),
            Err(InvalidParameterError::VolumeOrder { .. })
        ));

        let zero = CycleParameters::default().with_volumes(0.0, 1.0);
        assert_eq!(
            CarnotCycle::with_parameters(500.0, 250.0, zero),
            Err(InvalidParameterError::Volume { v1: 0.0 })
        );
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(matches!(
            CarnotCycle::new(f64::NAN, 300.0),
            Err(InvalidParameterError::NonFinite { what: "t_hot", .. })
        ));
        assert!(matches!(
            CarnotCycle::new(600.0, f64::NAN),
            Err(InvalidParameterError::NonFinite { what: "t_cold", .. })
        ));
        assert!(matches!(
            CarnotCycle::new(f64::INFINITY, 300.0),
            Err(InvalidParameterError::NonFinite { what: "t_hot", .. })
        ));

        let nan_gamma = CycleParameters::default().with_gamma(f64::NAN);
        assert!(matches!(
            CarnotCycle::with_parameters(600.0, 300.0, nan_gamma),
            Err(InvalidParameterError::NonFinite { what: "gamma", .. })
        ));
    }

    #[test]
    fn overflowing_volumes_are_rejected() {
        // r = 1000^(1/1e-3) overflows.
        let params = CycleParameters::default().with_gamma(1.001);
        assert!(matches!(
            CarnotCycle::with_parameters(1000.0, 1.0, params),
            Err(InvalidParameterError::NonFinite { what: "v3", .. })
        ));
    }

    #[test]
    fn efficiency_must_stay_below_one() {
        assert_eq!(
            CarnotCycle::new(1e20, 1.0),
            Err(InvalidParameterError::TemperatureRatio {
                t_hot: 1e20,
                t_cold: 1.0
            })
        );

        // Wide but resolvable reservoirs still build.
        let cycle = CarnotCycle::new(1e12, 1.0).unwrap();
        assert!(cycle.efficiency() < 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_hot_temperature_has_zero_efficiency() {
        let cycle = CarnotCycle {
            t_hot: 0.0,
            ..CarnotCycle::new(600.0, 300.0).unwrap()
        };
        assert_eq!(cycle.efficiency(), 0.0);
    }

    #[test]
    fn corner_states() {
        let cycle = CarnotCycle::new(600.0, 300.0).unwrap();
        let [s1, s2, s3, s4] = cycle.states();

        assert_relative_eq!(s1.pressure, 600.0);
        assert_relative_eq!(s2.pressure, 300.0);
        assert_relative_eq!(s3.temperature, 300.0);
        assert_relative_eq!(s3.pressure, 300.0 / cycle.v3());
        assert_relative_eq!(s4.volume, cycle.v4());

        for state in [s1, s2, s3, s4] {
            assert_relative_eq!(state.pressure * state.volume, state.temperature);
        }
    }

    #[test]
    fn curves_follow_cycle_order() {
        let cycle = CarnotCycle::new(600.0, 300.0).unwrap();
        let curves = cycle.curves(50).unwrap();

        for (curve, process) in curves.iter().zip(Process::ALL) {
            assert_eq!(curve.process, process);
            assert_eq!(curve.len(), 50);
            assert_eq!(curve.pressures.len(), 50);

            let (start, end) = cycle.volume_span(process);
            assert_relative_eq!(curve.first().unwrap().0, start);
            assert_relative_eq!(curve.last().unwrap().0, end);
        }

        let states = cycle.states();
        for (curve, state) in curves.iter().zip(states) {
            let (volume, pressure) = curve.first().unwrap();
            assert_relative_eq!(volume, state.volume);
            assert_relative_eq!(pressure, state.pressure, max_relative = 1e-12);
        }
    }

    #[test]
    fn curves_are_continuous() {
        let cycle = CarnotCycle::new(1500.0, 120.0).unwrap();
        assert_continuous(&cycle.curves(DEFAULT_SAMPLES).unwrap());
    }

    #[test]
    fn two_samples_per_curve() {
        let cycle = CarnotCycle::new(800.0, 300.0).unwrap();
        let curves = cycle.curves(2).unwrap();

        assert!(curves.iter().all(|curve| curve.len() == 2));
        assert_continuous(&curves);
    }

    #[test]
    fn too_few_samples() {
        let cycle = CarnotCycle::new(800.0, 300.0).unwrap();
        assert_eq!(
            cycle.curves(1),
            Err(InvalidParameterError::SampleCount { n: 1 })
        );
        assert_eq!(
            cycle.curves(0),
            Err(InvalidParameterError::SampleCount { n: 0 })
        );
    }

    #[test]
    fn curves_are_repeatable() {
        let cycle = CarnotCycle::new(700.0, 280.0).unwrap();
        assert_eq!(cycle.curves(120).unwrap(), cycle.curves(120).unwrap());
        assert_eq!(cycle.default_curves(), cycle.curves(DEFAULT_SAMPLES).unwrap());
    }

    #[test]
    fn pressure_falls_as_volume_grows() {
        let cycle = CarnotCycle::new(1000.0, 400.0).unwrap();

        for curve in cycle.curves(100).unwrap() {
            let points: Vec<_> = curve.points().collect();
            for pair in points.windows(2) {
                let (v_a, p_a) = pair[0];
                let (v_b, p_b) = pair[1];
                assert!(
                    (v_b - v_a) * (p_b - p_a) < 0.0,
                    "{}: pressure must fall as volume grows",
                    curve.process
                );
            }
        }
    }
}
