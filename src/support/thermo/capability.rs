//! Traits a property model implements to be usable by the sizing search.

mod state_from;

pub use state_from::StateFrom;

/// Ties a property model to the propellant it describes.
///
/// `Incompressible<Oxygen>` describes [`Oxygen`], so its inputs and the
/// states it returns are typed by that marker.
///
/// [`Oxygen`]: crate::support::thermo::fluid::Oxygen
pub trait ThermoModel {
    type Fluid;
}
