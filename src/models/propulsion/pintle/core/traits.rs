use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::capability::{StateFrom, ThermoModel};

/// Required thermo model bounds for pintle sizing.
///
/// The search only needs a density at each propellant's inlet temperature
/// and pressure.
#[doc(hidden)]
pub trait PintleThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid> + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
{
}

impl<Fluid, T> PintleThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid> + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
{
}
