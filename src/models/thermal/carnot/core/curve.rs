//! Sampled pressure-volume curves for the four Carnot processes.

use std::fmt;

/// Default number of samples per process curve.
pub const DEFAULT_SAMPLES: usize = 300;

/// The four sampled process curves in cycle order `1→2`, `2→3`, `3→4`, `4→1`.
pub type Curves = [ProcessCurve; 4];

/// One of the four reversible processes making up a Carnot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    /// `1→2`: heat absorbed from the hot reservoir at `T_hot`.
    IsothermalExpansion,

    /// `2→3`: expansion without heat exchange, cooling from `T_hot` to `T_cold`.
    AdiabaticExpansion,

    /// `3→4`: heat rejected to the cold reservoir at `T_cold`.
    IsothermalCompression,

    /// `4→1`: compression without heat exchange, heating from `T_cold` to `T_hot`.
    AdiabaticCompression,
}

impl Process {
    /// All processes in cycle order.
    pub const ALL: [Process; 4] = [
        Process::IsothermalExpansion,
        Process::AdiabaticExpansion,
        Process::IsothermalCompression,
        Process::AdiabaticCompression,
    ];

    /// Returns a human-readable label naming the state transition.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Process::IsothermalExpansion => "1→2: isothermal expansion (hot)",
            Process::AdiabaticExpansion => "2→3: adiabatic expansion",
            Process::IsothermalCompression => "3→4: isothermal compression (cold)",
            Process::AdiabaticCompression => "4→1: adiabatic compression",
        }
    }

    /// Returns `true` for the constant-temperature processes.
    #[must_use]
    pub fn is_isothermal(self) -> bool {
        matches!(
            self,
            Process::IsothermalExpansion | Process::IsothermalCompression
        )
    }

    /// Returns `true` if the gas volume grows during the process.
    #[must_use]
    pub fn is_expansion(self) -> bool {
        matches!(
            self,
            Process::IsothermalExpansion | Process::AdiabaticExpansion
        )
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sampled pressure-volume points along a single process.
///
/// Points are ordered in the direction the process runs, so compression
/// curves list volumes from largest to smallest.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCurve {
    pub process: Process,
    pub volumes: Vec<f64>,
    pub pressures: Vec<f64>,
}

impl ProcessCurve {
    /// Returns the label of the sampled process.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.process.label()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Returns the `(V, P)` point where the process starts.
    #[must_use]
    pub fn first(&self) -> Option<(f64, f64)> {
        Some((*self.volumes.first()?, *self.pressures.first()?))
    }

    /// Returns the `(V, P)` point where the process ends.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.volumes.last()?, *self.pressures.last()?))
    }

    /// Iterates over `(V, P)` points in process order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.volumes
            .iter()
            .copied()
            .zip(self.pressures.iter().copied())
    }
}

/// Returns `n` evenly spaced values from `start` to `end`, both included.
///
/// The final value is set to `end` exactly so adjacent curves share their
/// boundary volume bit for bit.
pub(super) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "linspace requires at least 2 samples");

    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (n - 1) as f64;

    (0..n)
        .map(|i| {
            if i == n - 1 {
                end
            } else {
                #[allow(clippy::cast_precision_loss)]
                let offset = step * i as f64;
                start + offset
            }
        })
        .collect()
}
