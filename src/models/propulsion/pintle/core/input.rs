mod geometry;
mod mode;
mod operating_point;
mod pressure_drops;
mod propellants;

pub use geometry::GeometryParameters;
pub use mode::OperatingMode;
pub use operating_point::OperatingPoint;
pub use pressure_drops::PressureDrops;
pub use propellants::Propellants;

use super::ConfigError;

/// Everything the search needs to know about one injector design point.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInput<Ox, Fuel> {
    pub propellants: Propellants<Ox, Fuel>,
    pub operating_point: OperatingPoint,
    pub pressure_drops: PressureDrops,
    pub geometry: GeometryParameters,
}

impl<Ox: Default, Fuel: Default> SizingInput<Ox, Fuel> {
    /// Builds the stock input for a test campaign.
    ///
    /// Uses [`OperatingPoint::preset`], the mode's injector pressure drop on
    /// both sides, and the default geometry.
    #[must_use]
    pub fn preset(mode: OperatingMode) -> Self {
        let operating_point = OperatingPoint::preset(mode);
        Self {
            propellants: Propellants::default(),
            pressure_drops: PressureDrops::for_mode(mode, operating_point.chamber_pressure),
            operating_point,
            geometry: GeometryParameters::default(),
        }
    }
}

impl<Ox, Fuel> SizingInput<Ox, Fuel> {
    /// Checks every scalar input for physical validity.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.operating_point.validate()?;
        self.pressure_drops.validate()?;
        self.geometry.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pascal;

    use crate::support::thermo::fluid::{Ethanol, Oxygen, Water};

    #[test]
    fn hotfire_preset_uses_a_fifth_of_chamber_pressure() {
        let input = SizingInput::<Oxygen, Ethanol>::preset(OperatingMode::Hotfire);

        assert_relative_eq!(
            input.pressure_drops.oxidizer().get::<pascal>(),
            0.2 * 2_068_427.184,
            max_relative = 1e-12
        );
        assert_eq!(input.pressure_drops.oxidizer(), input.pressure_drops.fuel());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn water_test_preset_is_valid() {
        let input = SizingInput::<Water, Water>::preset(OperatingMode::WaterTest);
        assert!(input.validate().is_ok());
        assert_relative_eq!(input.operating_point.mixture_ratio, 1.0);
    }

    #[test]
    fn validation_reports_the_offending_input() {
        let mut input = SizingInput::<Oxygen, Ethanol>::preset(OperatingMode::Hotfire);
        input.geometry.discharge_coefficient = 1.2;

        assert!(matches!(
            input.validate(),
            Err(ConfigError::DischargeCoefficient(_))
        ));
    }
}
