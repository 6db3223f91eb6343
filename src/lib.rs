//! # Carnot Models
//!
//! An ideal Carnot heat engine model for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given hot and cold reservoir temperatures, the model derives the four
//! corner states of the cycle, samples pressure-volume curves for each
//! process, and reports efficiency, work, and heat flows in closed form.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use carnot_models::models::thermal::carnot::CarnotCycle;
//!
//! let cycle = CarnotCycle::new(600.0, 300.0)?;
//! for curve in cycle.curves(100)? {
//!     println!("{}: {} points", curve.label(), curve.len());
//! }
//! println!("efficiency = {:.1}%", 100.0 * cycle.efficiency());
//! # Ok::<(), carnot_models::models::thermal::carnot::InvalidParameterError>(())
//! ```
//!
//! Modules in [`support`] are part of the public API, but their APIs are not stable.

pub mod models;
pub mod support;
