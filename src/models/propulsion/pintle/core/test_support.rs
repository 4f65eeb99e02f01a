use std::{cell::Cell, marker::PhantomData};

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::support::{
    drill::DrillCatalog,
    thermo::{
        PropertyError, State,
        capability::{StateFrom, ThermoModel},
        fluid::{Ethanol, Oxygen},
        model::Incompressible,
    },
};

use super::{FlowConditions, OperatingMode, SearchConfig, SizingInput, search::size};

/// Constant-density model that records how it was queried.
pub(super) struct FixedDensity<Fluid> {
    density: MassDensity,
    calls: Cell<usize>,
    last_pressure: Cell<Pressure>,
    _fluid: PhantomData<Fluid>,
}

impl<Fluid> FixedDensity<Fluid> {
    pub(super) fn new(kg_per_m3: f64) -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(kg_per_m3),
            calls: Cell::new(0),
            last_pressure: Cell::new(Pressure::new::<pascal>(f64::NAN)),
            _fluid: PhantomData,
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(super) fn last_pressure(&self) -> Pressure {
        self.last_pressure.get()
    }
}

impl<Fluid> ThermoModel for FixedDensity<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for FixedDensity<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.last_pressure.set(pressure);
        Ok(State::new(fluid, temperature, pressure, self.density))
    }
}

/// Fuel model that rejects every state.
pub(super) struct FailingThermo;

impl ThermoModel for FailingThermo {
    type Fluid = Ethanol;
}

impl StateFrom<(Ethanol, ThermodynamicTemperature, Pressure)> for FailingThermo {
    type Error = PropertyError;

    fn state_from(
        &self,
        _input: (Ethanol, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Ethanol>, Self::Error> {
        Err(PropertyError::OutOfDomain {
            context: "fuel is two-phase at the inlet".to_string(),
        })
    }
}

/// Synthetic drill set from 0.10 mm to 13.0 mm in 0.05 mm steps.
pub(super) fn catalog() -> DrillCatalog {
    DrillCatalog::from_millimeters((0..=258).map(|i| 0.1 + 0.05 * f64::from(i)))
        .expect("synthetic catalog is non-empty")
}

pub(super) fn lox() -> Incompressible<Oxygen> {
    Incompressible::new().expect("oxygen parameters are valid")
}

pub(super) fn ethanol() -> Incompressible<Ethanol> {
    Incompressible::new().expect("ethanol parameters are valid")
}

pub(super) fn hotfire() -> SizingInput<Oxygen, Ethanol> {
    SizingInput::preset(OperatingMode::Hotfire)
}

/// Hotfire conditions with 1141 kg/m³ oxygen and 789 kg/m³ ethanol.
pub(super) fn hotfire_conditions() -> FlowConditions {
    let config = SearchConfig::default();
    size(&hotfire(), &config, &lox(), &ethanol(), &catalog())
        .expect("hotfire preset resolves")
        .flow
}
