use uom::si::{
    f64::{MassRate, Pressure, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::propulsion::pintle::core::{ConfigError, Propellant},
    support::constraint::{Constraint, StrictlyPositive, UnitIntervalUpperOpen},
};

use super::OperatingMode;

/// Chamber operating point and propellant supply conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub chamber_pressure: Pressure,
    pub total_mass_flow: MassRate,

    /// Oxidizer-to-fuel mass ratio.
    pub mixture_ratio: f64,

    pub oxidizer_temperature: ThermodynamicTemperature,
    pub fuel_temperature: ThermodynamicTemperature,

    /// Fraction of the fuel diverted to wall film cooling instead of the
    /// pintle annulus.
    pub film_cooling_fraction: f64,
}

impl OperatingPoint {
    /// Film-cooling fraction used by the presets.
    pub const DEFAULT_FILM_COOLING_FRACTION: f64 = 0.05;

    /// Stock operating point for a test campaign.
    ///
    /// - Hotfire: 0.944 kg/s at O/F 3 into a 300 psia chamber, liquid oxygen
    ///   at 90 K and fuel at 298 K.
    /// - Water test: 1.158 kg/s at O/F 1 into ambient, both sides at 293 K.
    #[must_use]
    pub fn preset(mode: OperatingMode) -> Self {
        match mode {
            OperatingMode::Hotfire => Self {
                chamber_pressure: Pressure::new::<pascal>(2_068_427.184),
                total_mass_flow: MassRate::new::<kilogram_per_second>(0.944),
                mixture_ratio: 3.0,
                oxidizer_temperature: ThermodynamicTemperature::new::<kelvin>(90.0),
                fuel_temperature: ThermodynamicTemperature::new::<kelvin>(298.0),
                film_cooling_fraction: Self::DEFAULT_FILM_COOLING_FRACTION,
            },
            OperatingMode::WaterTest => Self {
                chamber_pressure: Pressure::new::<pascal>(101_352.932),
                total_mass_flow: MassRate::new::<kilogram_per_second>(1.158),
                mixture_ratio: 1.0,
                oxidizer_temperature: ThermodynamicTemperature::new::<kelvin>(293.0),
                fuel_temperature: ThermodynamicTemperature::new::<kelvin>(293.0),
                film_cooling_fraction: Self::DEFAULT_FILM_COOLING_FRACTION,
            },
        }
    }

    /// Checks that every field is physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        StrictlyPositive::check(&self.chamber_pressure).map_err(ConfigError::ChamberPressure)?;
        StrictlyPositive::check(&self.total_mass_flow).map_err(ConfigError::TotalMassFlow)?;
        StrictlyPositive::check(&self.mixture_ratio).map_err(ConfigError::MixtureRatio)?;

        for (propellant, temperature) in [
            (Propellant::Oxidizer, self.oxidizer_temperature),
            (Propellant::Fuel, self.fuel_temperature),
        ] {
            StrictlyPositive::check(&temperature.get::<kelvin>())
                .map_err(|source| ConfigError::Temperature { propellant, source })?;
        }

        UnitIntervalUpperOpen::check(&self.film_cooling_fraction)
            .map_err(ConfigError::FilmCoolingFraction)
    }

    /// Fuel mass flow, `m_total / (1 + O/F)`.
    #[must_use]
    pub fn fuel_mass_flow(&self) -> MassRate {
        self.total_mass_flow / (1.0 + self.mixture_ratio)
    }

    /// Oxidizer mass flow, `m_fuel · O/F`.
    #[must_use]
    pub fn oxidizer_mass_flow(&self) -> MassRate {
        self.fuel_mass_flow() * self.mixture_ratio
    }

    /// Fuel mass flow carried by the pintle annulus after film cooling.
    #[must_use]
    pub fn pintle_fuel_mass_flow(&self) -> MassRate {
        self.fuel_mass_flow() * (1.0 - self.film_cooling_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn splits_mass_flow_by_mixture_ratio() {
        let point = OperatingPoint::preset(OperatingMode::Hotfire);

        let fuel = point.fuel_mass_flow().get::<kilogram_per_second>();
        let ox = point.oxidizer_mass_flow().get::<kilogram_per_second>();
        let pintle = point.pintle_fuel_mass_flow().get::<kilogram_per_second>();

        assert_relative_eq!(fuel, 0.236, max_relative = 1e-12);
        assert_relative_eq!(ox, 0.708, max_relative = 1e-12);
        assert_relative_eq!(pintle, 0.2242, max_relative = 1e-12);
        assert_relative_eq!(fuel + ox, 0.944, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let mut point = OperatingPoint::preset(OperatingMode::Hotfire);
        point.total_mass_flow = MassRate::new::<kilogram_per_second>(0.0);
        assert_eq!(
            point.validate(),
            Err(ConfigError::TotalMassFlow(ConstraintError::Zero))
        );

        let mut point = OperatingPoint::preset(OperatingMode::Hotfire);
        point.mixture_ratio = f64::NAN;
        assert_eq!(
            point.validate(),
            Err(ConfigError::MixtureRatio(ConstraintError::NotANumber))
        );

        let mut point = OperatingPoint::preset(OperatingMode::Hotfire);
        point.fuel_temperature = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(matches!(
            point.validate(),
            Err(ConfigError::Temperature {
                propellant: Propellant::Fuel,
                ..
            })
        ));
    }

    #[test]
    fn film_cooling_cannot_take_all_the_fuel() {
        let mut point = OperatingPoint::preset(OperatingMode::WaterTest);
        point.film_cooling_fraction = 1.0;
        assert!(matches!(
            point.validate(),
            Err(ConfigError::FilmCoolingFraction(_))
        ));

        point.film_cooling_fraction = 0.0;
        assert!(point.validate().is_ok());
    }
}
