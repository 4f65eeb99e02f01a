use uom::si::{
    f64::{Length, MassDensity, MassRate, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::{
    models::propulsion::pintle::core::{
        Propellant, SizingError, SizingInput, traits::PintleThermoModel,
    },
    support::constraint::{Constraint, StrictlyPositive},
};

/// Quantities shared by every candidate of a sizing run.
///
/// Resolved once from the [`SizingInput`] before the search starts: the mass
/// flow split, both propellant densities at their inlet conditions, and the
/// pintle shaft size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    pub oxidizer_mass_flow: MassRate,
    pub fuel_mass_flow: MassRate,
    pub pintle_fuel_mass_flow: MassRate,
    pub mixture_ratio: f64,
    pub oxidizer_density: MassDensity,
    pub fuel_density: MassDensity,
    pub oxidizer_pressure_drop: Pressure,
    pub shaft_diameter: Length,
    pub discharge_coefficient: f64,
}

impl FlowConditions {
    /// Validates the input and queries the property models.
    ///
    /// Each density is evaluated at that side's inlet pressure, chamber
    /// pressure plus its injector drop.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the input is invalid, a property lookup
    /// fails, or a returned density is not strictly positive.
    pub(super) fn resolve<Ox, Fuel>(
        input: &SizingInput<Ox, Fuel>,
        thermo_ox: &impl PintleThermoModel<Ox>,
        thermo_fuel: &impl PintleThermoModel<Fuel>,
    ) -> Result<Self, SizingError>
    where
        Ox: Clone,
        Fuel: Clone,
    {
        input.validate()?;

        let point = &input.operating_point;
        let drops = &input.pressure_drops;

        let ox_inlet = point.chamber_pressure + drops.oxidizer();
        let fuel_inlet = point.chamber_pressure + drops.fuel();

        let oxidizer_density = thermo_ox
            .state_from((
                input.propellants.oxidizer.clone(),
                point.oxidizer_temperature,
                ox_inlet,
            ))
            .map_err(|err| SizingError::lookup_failed(Propellant::Oxidizer, err))?
            .density;
        check_density(Propellant::Oxidizer, oxidizer_density)?;

        let fuel_density = thermo_fuel
            .state_from((
                input.propellants.fuel.clone(),
                point.fuel_temperature,
                fuel_inlet,
            ))
            .map_err(|err| SizingError::lookup_failed(Propellant::Fuel, err))?
            .density;
        check_density(Propellant::Fuel, fuel_density)?;

        tracing::info!(
            oxidizer_density = oxidizer_density.get::<kilogram_per_cubic_meter>(),
            fuel_density = fuel_density.get::<kilogram_per_cubic_meter>(),
            oxidizer_inlet_pa = ox_inlet.get::<pascal>(),
            fuel_inlet_pa = fuel_inlet.get::<pascal>(),
            "resolved propellant densities"
        );

        Ok(Self {
            oxidizer_mass_flow: point.oxidizer_mass_flow(),
            fuel_mass_flow: point.fuel_mass_flow(),
            pintle_fuel_mass_flow: point.pintle_fuel_mass_flow(),
            mixture_ratio: point.mixture_ratio,
            oxidizer_density,
            fuel_density,
            oxidizer_pressure_drop: drops.oxidizer(),
            shaft_diameter: input.geometry.shaft_diameter(),
            discharge_coefficient: input.geometry.discharge_coefficient,
        })
    }

    #[must_use]
    pub fn shaft_radius(&self) -> Length {
        0.5 * self.shaft_diameter
    }
}

fn check_density(propellant: Propellant, density: MassDensity) -> Result<(), SizingError> {
    StrictlyPositive::check(&density).map_err(|_| SizingError::NonPhysicalDensity {
        propellant,
        density,
    })
}
