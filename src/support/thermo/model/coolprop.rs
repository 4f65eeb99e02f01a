//! Propellant densities from CoolProp, via `rfluids`.
//!
//! Enabled by the `coolprop` feature.

mod error;

use std::{marker::PhantomData, sync::Mutex};

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{StateFrom, ThermoModel},
};

pub use error::CoolPropError;

/// A propellant CoolProp knows by name.
pub trait CoolPropFluid: Default + Send + Sync + 'static {
    /// Equation-of-state backend, `"HEOS"` for the built-in fluids.
    const BACKEND: &'static str;
    const NAME: &'static str;
}

/// Real-fluid inlet densities from CoolProp.
///
/// The state is flashed from pressure and temperature, so an inlet that is
/// two-phase or supercritical is rejected by the backend rather than given a
/// liquid density.
pub struct CoolProp<F: CoolPropFluid> {
    // Update and query must happen under one lock.
    backend: Mutex<AbstractState>,
    _fluid: PhantomData<F>,
}

impl<F: CoolPropFluid> ThermoModel for CoolProp<F> {
    type Fluid = F;
}

impl<F: CoolPropFluid> CoolProp<F> {
    /// Opens a backend state for `F`.
    ///
    /// # Errors
    ///
    /// Fails if CoolProp does not recognize `F::BACKEND` or `F::NAME`.
    pub fn new() -> Result<Self, CoolPropError> {
        Ok(Self {
            backend: Mutex::new(AbstractState::new(F::BACKEND, F::NAME)?),
            _fluid: PhantomData,
        })
    }

    fn density_at(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<f64, CoolPropError> {
        let mut backend = self.backend.lock()?;
        backend.update(
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )?;
        Ok(backend.keyed_output(FluidParam::DMass)?)
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, Pressure)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (F, ThermodynamicTemperature, Pressure),
    ) -> Result<State<F>, Self::Error> {
        let density = self.density_at(temperature, pressure)?;
        Ok(State::new(
            fluid,
            temperature,
            pressure,
            MassDensity::new::<kilogram_per_cubic_meter>(density),
        ))
    }
}
