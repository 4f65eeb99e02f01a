use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

/// A propellant at a known temperature and pressure, with its density.
///
/// `Fluid` is normally a marker such as
/// [`Oxygen`](crate::support::thermo::fluid::Oxygen).
///
/// ```
/// use pintle_sizing::support::thermo::{State, fluid::Ethanol};
/// use uom::si::{
///     f64::{MassDensity, Pressure, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::psi,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let inlet = State::new(
///     Ethanol,
///     ThermodynamicTemperature::new::<kelvin>(298.0),
///     Pressure::new::<psi>(360.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(789.0),
/// );
/// assert!((inlet.density.get::<kilogram_per_cubic_meter>() - 789.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub fluid: Fluid,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
}

impl<Fluid> State<Fluid> {
    #[must_use]
    pub fn new(
        fluid: Fluid,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        density: MassDensity,
    ) -> Self {
        Self {
            fluid,
            temperature,
            pressure,
            density,
        }
    }
}
