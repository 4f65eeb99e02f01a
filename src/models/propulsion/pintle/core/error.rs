use std::fmt;

use thiserror::Error;
use uom::si::f64::MassDensity;

use crate::support::constraint::ConstraintError;

/// Identifies one side of the injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Propellant {
    Oxidizer,
    Fuel,
}

impl fmt::Display for Propellant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Oxidizer => "oxidizer",
            Self::Fuel => "fuel",
        })
    }
}

/// A sizing input that would make the search non-physical.
///
/// Every input is checked before the first candidate is evaluated, so these
/// errors never carry partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("chamber pressure: {0}")]
    ChamberPressure(ConstraintError),

    #[error("total mass flow: {0}")]
    TotalMassFlow(ConstraintError),

    #[error("mixture ratio: {0}")]
    MixtureRatio(ConstraintError),

    #[error("{propellant} temperature: {source}")]
    Temperature {
        propellant: Propellant,
        source: ConstraintError,
    },

    #[error("film-cooling fraction must lie in [0, 1): {0}")]
    FilmCoolingFraction(ConstraintError),

    #[error("{propellant} pressure drop: {source}")]
    PressureDrop {
        propellant: Propellant,
        source: ConstraintError,
    },

    #[error("chamber diameter: {0}")]
    ChamberDiameter(ConstraintError),

    #[error("shaft-to-chamber diameter ratio must lie in (0, 1]: {0}")]
    ShaftRatio(ConstraintError),

    #[error("skip ratio: {0}")]
    SkipRatio(ConstraintError),

    #[error("discharge coefficient must lie in (0, 1]: {0}")]
    DischargeCoefficient(ConstraintError),

    #[error("minimum hole count must be at least 1")]
    ZeroHoleCount,

    #[error("hole count step must be at least 1")]
    ZeroHoleStep,
}

/// Errors that abort a sizing run.
///
/// An empty result is not an error; see [`Report::NoAcceptableConfiguration`].
///
/// [`Report::NoAcceptableConfiguration`]: super::Report::NoAcceptableConfiguration
#[derive(Debug, Error)]
pub enum SizingError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The property provider could not resolve a propellant density.
    #[error("{propellant} property lookup failed")]
    PropertyLookup {
        propellant: Propellant,

        /// Underlying thermodynamic model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider returned a density that is zero, negative or NaN.
    #[error("{propellant} density {density:?} is not physical")]
    NonPhysicalDensity {
        propellant: Propellant,
        density: MassDensity,
    },
}

impl SizingError {
    /// Wraps a property provider failure for one propellant.
    pub(super) fn lookup_failed(
        propellant: Propellant,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyLookup {
            propellant,
            source: Box::new(err),
        }
    }
}
