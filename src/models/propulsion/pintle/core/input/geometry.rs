use uom::si::{f64::Length, length::meter};

use crate::{
    models::propulsion::pintle::core::ConfigError,
    support::constraint::{Constraint, StrictlyPositive, UnitIntervalLowerOpen},
};

/// Fixed injector and chamber geometry.
///
/// The pintle shaft and the skip length scale with the chamber, so only the
/// chamber diameter is dimensional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParameters {
    pub chamber_diameter: Length,

    /// Pintle shaft diameter as a fraction of chamber diameter.
    pub shaft_ratio: f64,

    /// Skip length as a multiple of shaft diameter.
    pub skip_ratio: f64,

    /// Orifice discharge coefficient, `0 < cd <= 1`.
    pub discharge_coefficient: f64,
}

impl Default for GeometryParameters {
    /// A 3.25 in chamber with a one-fifth shaft, unit skip and `cd = 0.65`.
    fn default() -> Self {
        Self {
            chamber_diameter: Length::new::<meter>(0.082_55),
            shaft_ratio: 0.2,
            skip_ratio: 1.0,
            discharge_coefficient: 0.65,
        }
    }
}

impl GeometryParameters {
    #[must_use]
    pub fn shaft_diameter(&self) -> Length {
        self.chamber_diameter * self.shaft_ratio
    }

    #[must_use]
    pub fn shaft_radius(&self) -> Length {
        0.5 * self.shaft_diameter()
    }

    /// Axial distance from the fuel annulus exit to the oxidizer holes.
    #[must_use]
    pub fn skip_length(&self) -> Length {
        self.shaft_diameter() * self.skip_ratio
    }

    /// Checks that the geometry is physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        StrictlyPositive::check(&self.chamber_diameter).map_err(ConfigError::ChamberDiameter)?;
        UnitIntervalLowerOpen::check(&self.shaft_ratio).map_err(ConfigError::ShaftRatio)?;
        StrictlyPositive::check(&self.skip_ratio).map_err(ConfigError::SkipRatio)?;
        UnitIntervalLowerOpen::check(&self.discharge_coefficient)
            .map_err(ConfigError::DischargeCoefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::inch;

    #[test]
    fn derived_lengths_follow_the_chamber() {
        let geometry = GeometryParameters::default();

        assert_relative_eq!(geometry.chamber_diameter.get::<inch>(), 3.25, max_relative = 1e-12);
        assert_relative_eq!(geometry.shaft_diameter().get::<inch>(), 0.65, max_relative = 1e-12);
        assert_relative_eq!(geometry.shaft_radius().get::<inch>(), 0.325, max_relative = 1e-12);
        assert_eq!(geometry.skip_length(), geometry.shaft_diameter());
    }

    #[test]
    fn rejects_zero_shaft() {
        let geometry = GeometryParameters {
            shaft_ratio: 0.0,
            ..GeometryParameters::default()
        };
        assert!(matches!(geometry.validate(), Err(ConfigError::ShaftRatio(_))));
    }
}
