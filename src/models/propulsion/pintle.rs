//! Pintle injector sizing.
//!
//! [`PintleInjector`] is the [`twine_core::Model`] adapter. The search itself
//! lives in the internal `core` module, whose public types are re-exported
//! here.
//!
//! # Example
//!
//! ```
//! use pintle_sizing::{
//!     models::propulsion::pintle::{OperatingMode, PintleInjector, Report, SizingInput},
//!     support::{
//!         drill::DrillCatalog,
//!         thermo::{
//!             fluid::{Ethanol, Oxygen},
//!             model::Incompressible,
//!         },
//!     },
//! };
//! use twine_core::Model;
//!
//! let lox = Incompressible::<Oxygen>::new().unwrap();
//! let ethanol = Incompressible::<Ethanol>::new().unwrap();
//! let catalog = DrillCatalog::from_millimeters((0..=258).map(|i| 0.1 + 0.05 * f64::from(i))).unwrap();
//!
//! let injector = PintleInjector::new(&lox, &ethanol, &catalog);
//! let ranking = injector.call(&SizingInput::preset(OperatingMode::Hotfire)).unwrap();
//!
//! assert!(matches!(ranking.report(5), Report::Configurations { .. }));
//! ```

mod core;

pub use self::core::{
    AcceptanceWindow, Candidate, ConfigError, FlowConditions, GeometryParameters,
    HoleCountRange, Interval, OperatingMode, OperatingPoint, PintleThermoModel, PressureDrops,
    Propellant, Propellants, Ranking, Report, ReportRow, SearchConfig, Sizing, SizingError,
    SizingInput, size,
};

use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    drill::DrillCatalog,
    thermo::capability::{StateFrom, ThermoModel},
};

/// Pintle injector sizing model.
///
/// Borrows one property model per propellant and the drill catalog, so a
/// single instance can size many design points.
#[derive(Debug)]
pub struct PintleInjector<'a, OxThermo, FuelThermo> {
    thermo_ox: &'a OxThermo,
    thermo_fuel: &'a FuelThermo,
    catalog: &'a DrillCatalog,
    config: SearchConfig,
}

impl<'a, OxThermo, FuelThermo> PintleInjector<'a, OxThermo, FuelThermo> {
    /// Creates a model with the default [`SearchConfig`].
    #[must_use]
    pub fn new(
        thermo_ox: &'a OxThermo,
        thermo_fuel: &'a FuelThermo,
        catalog: &'a DrillCatalog,
    ) -> Self {
        Self {
            thermo_ox,
            thermo_fuel,
            catalog,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the search configuration.
    #[must_use]
    pub fn with_config(self, config: SearchConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<OxThermo, FuelThermo> Model for PintleInjector<'_, OxThermo, FuelThermo>
where
    OxThermo: ThermoModel
        + StateFrom<(
            <OxThermo as ThermoModel>::Fluid,
            ThermodynamicTemperature,
            Pressure,
        )>,
    FuelThermo: ThermoModel
        + StateFrom<(
            <FuelThermo as ThermoModel>::Fluid,
            ThermodynamicTemperature,
            Pressure,
        )>,
    <OxThermo as ThermoModel>::Fluid: Clone,
    <FuelThermo as ThermoModel>::Fluid: Clone,
{
    type Input = SizingInput<<OxThermo as ThermoModel>::Fluid, <FuelThermo as ThermoModel>::Fluid>;
    type Output = Ranking;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let sizing = size(
            input,
            &self.config,
            self.thermo_ox,
            self.thermo_fuel,
            self.catalog,
        )?;
        Ok(Ranking::new(sizing, &self.config.window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::kelvin;

    use crate::support::thermo::{
        fluid::{Ethanol, Oxygen, Water},
        model::Incompressible,
    };

    fn catalog() -> DrillCatalog {
        DrillCatalog::from_millimeters((0..=258).map(|i| 0.1 + 0.05 * f64::from(i))).unwrap()
    }

    #[test]
    fn sizes_a_hotfire_injector() {
        let lox = Incompressible::<Oxygen>::new().unwrap();
        let ethanol = Incompressible::<Ethanol>::new().unwrap();
        let catalog = catalog();
        let injector = PintleInjector::new(&lox, &ethanol, &catalog);

        let ranking = injector
            .call(&SizingInput::preset(OperatingMode::Hotfire))
            .unwrap();

        let best = ranking.best().unwrap();
        assert_eq!(best.holes, 56);
        assert!(injector.config().window.accepts(best.tmr, best.lmr));
    }

    #[test]
    fn custom_window_narrows_the_result() {
        let lox = Incompressible::<Oxygen>::new().unwrap();
        let ethanol = Incompressible::<Ethanol>::new().unwrap();
        let catalog = catalog();
        let narrow = SearchConfig {
            window: AcceptanceWindow {
                tmr: Interval::new(1.1, 1.2),
                lmr: Interval::new(1.1, 1.3),
            },
            ..SearchConfig::default()
        };

        let input = SizingInput::preset(OperatingMode::Hotfire);
        let all = PintleInjector::new(&lox, &ethanol, &catalog)
            .call(&input)
            .unwrap();
        let few = PintleInjector::new(&lox, &ethanol, &catalog)
            .with_config(narrow)
            .call(&input)
            .unwrap();

        assert!(few.len() < all.len());
        assert!(!few.is_empty());
    }

    #[test]
    fn water_test_runs_end_to_end() {
        let water = Incompressible::<Water>::new().unwrap();
        let catalog = catalog();
        let injector = PintleInjector::new(&water, &water, &catalog);

        let ranking = injector
            .call(&SizingInput::preset(OperatingMode::WaterTest))
            .unwrap();

        assert_eq!(ranking.evaluated(), 55);
        for candidate in ranking.candidates() {
            assert!(injector.config().window.accepts(candidate.tmr, candidate.lmr));
        }
    }

    #[test]
    fn out_of_range_temperature_is_a_lookup_failure() {
        let lox = Incompressible::<Oxygen>::new().unwrap();
        let ethanol = Incompressible::<Ethanol>::new().unwrap();
        let catalog = catalog();
        let mut input = SizingInput::preset(OperatingMode::Hotfire);
        input.operating_point.oxidizer_temperature = ThermodynamicTemperature::new::<kelvin>(305.0);

        let result = PintleInjector::new(&lox, &ethanol, &catalog).call(&input);
        assert!(matches!(
            result,
            Err(SizingError::PropertyLookup {
                propellant: Propellant::Oxidizer,
                ..
            })
        ));
    }
}
