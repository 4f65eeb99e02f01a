//! Canonical propellant identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted: constant liquid properties for
//! [`Incompressible`](crate::support::thermo::model::Incompressible), or
//! backend identifiers for
//! [`CoolProp`](crate::support::thermo::model::CoolProp) when the `coolprop`
//! feature is enabled.

mod ethanol;
mod nitrous_oxide;
mod oxygen;
mod water;

pub use ethanol::Ethanol;
pub use nitrous_oxide::NitrousOxide;
pub use oxygen::Oxygen;
pub use water::Water;
