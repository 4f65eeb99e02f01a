//! Fluid property modeling for propellant density evaluation.
//!
//! The sizing search only needs one property per propellant: the density at
//! the injector inlet. Models expose it by constructing a [`State`] from a
//! `(Fluid, ThermodynamicTemperature, Pressure)` input through
//! [`capability::StateFrom`].

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
