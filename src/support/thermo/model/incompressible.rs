//! Constant-density liquid model.
//!
//! `Incompressible` implements the simplest useful approximation for liquid
//! propellants: the density is a fixed reference value, independent of
//! pressure and temperature.
//!
//! # Assumptions
//!
//! - Density is treated as constant (`ρ = ρ_ref`)
//! - The fluid is a liquid only within `[T_min, T_max]`; states outside that
//!   range are rejected rather than silently given a liquid density
//! - Pressure effects are not modeled, but the pressure must be positive
//!
//! # When To Use
//!
//! Use this model for preliminary sizing and water-flow tests, where the
//! propellants are well inside their liquid range. If you need real-fluid
//! densities (for example near the critical point of nitrous oxide), use
//! [`super::CoolProp`] (when enabled) instead.

use std::{cmp::Ordering, marker::PhantomData};

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{StateFrom, ThermoModel},
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncompressibleParametersError {
    #[error("invalid reference density: {density:?}")]
    Density { density: MassDensity },
    #[error("invalid liquid temperature range: {min:?} to {max:?}")]
    TemperatureRange {
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    },
}

/// Constant parameters for the [`Incompressible`] model.
///
/// These values are typically provided by a fluid's [`IncompressibleFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    pub density: MassDensity,
    pub min_temperature: ThermodynamicTemperature,
    pub max_temperature: ThermodynamicTemperature,
}

impl IncompressibleParameters {
    /// Creates parameters from a density in kg/m³ and a liquid range in kelvin.
    #[must_use]
    pub fn new(density: MassDensity, min_kelvin: f64, max_kelvin: f64) -> Self {
        Self {
            density,
            min_temperature: ThermodynamicTemperature::new::<kelvin>(min_kelvin),
            max_temperature: ThermodynamicTemperature::new::<kelvin>(max_kelvin),
        }
    }
}

/// Fluid constants required by the [`Incompressible`] model.
pub trait IncompressibleFluid {
    /// Returns the constant parameters for use with [`Incompressible`].
    fn parameters() -> IncompressibleParameters;
}

/// Constant-density liquid model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incompressible<Fluid> {
    density: MassDensity,
    t_min: ThermodynamicTemperature,
    t_max: ThermodynamicTemperature,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Incompressible<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> Incompressible<Fluid> {
    /// Creates a model from the fluid's [`IncompressibleFluid`] parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if any required constant is invalid.
    pub fn new() -> Result<Self, IncompressibleParametersError>
    where
        Fluid: IncompressibleFluid,
    {
        Self::with_parameters(Fluid::parameters())
    }

    /// Creates a model from explicit parameters.
    ///
    /// Useful when a propellant blend or a measured density should replace
    /// the fluid's tabulated value.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if the density is not strictly
    /// positive or the temperature range is empty.
    pub fn with_parameters(
        parameters: IncompressibleParameters,
    ) -> Result<Self, IncompressibleParametersError> {
        let density = parameters.density;
        if StrictlyPositive::check(&density.value).is_err() {
            return Err(IncompressibleParametersError::Density { density });
        }

        let (min, max) = (parameters.min_temperature, parameters.max_temperature);
        let ordered = min.partial_cmp(&max) == Some(Ordering::Less);
        if StrictlyPositive::check(&min.value).is_err() || !ordered {
            return Err(IncompressibleParametersError::TemperatureRange { min, max });
        }

        Ok(Self {
            density,
            t_min: min,
            t_max: max,
            _marker: PhantomData,
        })
    }

    /// Returns the constant density used by this model.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }
}

/// Enables state creation from temperature and pressure.
///
/// The pressure is only checked for positivity; the returned state always
/// carries the reference density.
impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for Incompressible<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        if StrictlyPositive::check(&pressure.value).is_err() {
            return Err(PropertyError::OutOfDomain {
                context: format!("pressure {:.1} Pa is not positive", pressure.value),
            });
        }

        if !(self.t_min..=self.t_max).contains(&temperature) {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {:.2} K is outside the liquid range {:.2} K to {:.2} K",
                    temperature.get::<kelvin>(),
                    self.t_min.get::<kelvin>(),
                    self.t_max.get::<kelvin>(),
                ),
            });
        }

        Ok(State::new(fluid, temperature, pressure, self.density))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::megapascal};

    use crate::support::thermo::fluid::{Ethanol, Oxygen};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct MockLiquid;

    impl IncompressibleFluid for MockLiquid {
        fn parameters() -> IncompressibleParameters {
            IncompressibleParameters::new(
                MassDensity::new::<kilogram_per_cubic_meter>(500.0),
                200.0,
                400.0,
            )
        }
    }

    fn inlet_pressure() -> Pressure {
        Pressure::new::<megapascal>(2.5)
    }

    #[test]
    fn density_is_constant_inside_liquid_range() -> Result<(), PropertyError> {
        let thermo = Incompressible::<MockLiquid>::new().unwrap();

        let cold = thermo.state_from((
            MockLiquid,
            ThermodynamicTemperature::new::<kelvin>(210.0),
            inlet_pressure(),
        ))?;
        let warm = thermo.state_from((
            ThermodynamicTemperature::new::<kelvin>(390.0),
            inlet_pressure(),
        ))?;

        assert_relative_eq!(cold.density.get::<kilogram_per_cubic_meter>(), 500.0);
        assert_eq!(cold.density, warm.density);
        Ok(())
    }

    #[test]
    fn rejects_temperature_outside_liquid_range() {
        let thermo = Incompressible::<Ethanol>::new().unwrap();

        // Combustion-chamber temperatures are far above ethanol's critical point.
        let result =
            thermo.state_from((ThermodynamicTemperature::new::<kelvin>(3298.0), inlet_pressure()));

        assert!(matches!(result, Err(PropertyError::OutOfDomain { .. })));
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let thermo = Incompressible::<Oxygen>::new().unwrap();
        let result = thermo.state_from((
            ThermodynamicTemperature::new::<kelvin>(90.0),
            Pressure::new::<megapascal>(0.0),
        ));
        assert!(matches!(result, Err(PropertyError::OutOfDomain { .. })));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let bad_density = IncompressibleParameters::new(
            MassDensity::new::<kilogram_per_cubic_meter>(0.0),
            200.0,
            400.0,
        );
        assert!(matches!(
            Incompressible::<MockLiquid>::with_parameters(bad_density),
            Err(IncompressibleParametersError::Density { .. })
        ));

        let inverted = IncompressibleParameters::new(
            MassDensity::new::<kilogram_per_cubic_meter>(500.0),
            400.0,
            200.0,
        );
        assert!(matches!(
            Incompressible::<MockLiquid>::with_parameters(inverted),
            Err(IncompressibleParametersError::TemperatureRange { .. })
        ));
    }
}
