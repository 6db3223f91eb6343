//! Thermal systems models.
//!
//! This module contains models of heat engines and related thermodynamic cycles.

pub mod carnot;
