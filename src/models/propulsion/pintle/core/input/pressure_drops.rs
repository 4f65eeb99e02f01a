use uom::si::f64::Pressure;

use crate::{
    models::propulsion::pintle::core::{ConfigError, Propellant},
    support::constraint::{Constrained, Constraint, ConstraintResult, StrictlyPositive},
};

use super::OperatingMode;

/// Injector pressure drops on the oxidizer and fuel sides.
///
/// Each drop is `p_inlet - p_chamber` and must be strictly positive; a zero
/// drop would need an infinite orifice area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureDrops {
    oxidizer: Pressure,
    fuel: Pressure,
}

impl PressureDrops {
    /// Constructs validated pressure drops.
    ///
    /// # Errors
    ///
    /// Returns an error if either pressure drop is not strictly positive.
    pub fn new(oxidizer: Pressure, fuel: Pressure) -> ConstraintResult<Self> {
        let oxidizer = StrictlyPositive::new(oxidizer)?;
        let fuel = StrictlyPositive::new(fuel)?;
        Ok(Self::from_constrained(oxidizer, fuel))
    }

    /// Constructs pressure drops from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        oxidizer: Constrained<Pressure, StrictlyPositive>,
        fuel: Constrained<Pressure, StrictlyPositive>,
    ) -> Self {
        Self {
            oxidizer: oxidizer.into_inner(),
            fuel: fuel.into_inner(),
        }
    }

    /// Applies the mode's injector pressure drop to both sides.
    ///
    /// The result is not validated here; a non-positive chamber pressure is
    /// reported when the search checks its inputs.
    #[must_use]
    pub fn for_mode(mode: OperatingMode, chamber_pressure: Pressure) -> Self {
        let drop = mode.injector_pressure_drop(chamber_pressure);
        Self {
            oxidizer: drop,
            fuel: drop,
        }
    }

    /// Returns the oxidizer-side pressure drop.
    #[must_use]
    pub fn oxidizer(&self) -> Pressure {
        self.oxidizer
    }

    /// Returns the fuel-side pressure drop.
    #[must_use]
    pub fn fuel(&self) -> Pressure {
        self.fuel
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        for (propellant, drop) in [
            (Propellant::Oxidizer, self.oxidizer),
            (Propellant::Fuel, self.fuel),
        ] {
            StrictlyPositive::check(&drop)
                .map_err(|source| ConfigError::PressureDrop { propellant, source })?;
        }
        Ok(())
    }
}
