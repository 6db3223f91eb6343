//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The model module
//! re-exports the core types that callers need, such as the cycle itself and
//! its sampled curves.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that converts
//! between physical units and the core API.

pub mod thermal;
