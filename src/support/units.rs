//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at its model boundaries.
//! This module provides the pieces needed to move between the normalized
//! values used by the Carnot cycle core and physical quantities.
//!
//! ## Gas amount
//!
//! The core treats the gas amount `n·R` as one, so its energies are
//! reported in kelvin and its pressures in kelvin per unit volume.
//! A [`GasAmount`] restores the units:
//!
//! ```
//! use uom::si::{energy::joule, f64::HeatCapacity, heat_capacity::joule_per_kelvin};
//! use carnot_models::support::units::ScaleByGasAmount;
//!
//! let n_r = HeatCapacity::new::<joule_per_kelvin>(2.0);
//! assert_eq!(n_r.energy(150.0).get::<joule>(), 300.0);
//! ```

mod gas_amount;

pub use gas_amount::{GasAmount, ScaleByGasAmount};
