use crate::support::thermo::State;

use super::ThermoModel;

/// Builds a [`State`] from a particular combination of inputs.
///
/// The injector search resolves each propellant's inlet density through
/// `StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>`: the propellant
/// temperature at the chamber pressure plus the injector drop.
///
/// Models whose fluid is a `Default` marker also accept the two-element
/// `(temperature, pressure)` form, which fills in the fluid.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the model cannot represent `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        let fluid = <M as ThermoModel>::Fluid::default();
        self.state_from((fluid, a, b))
    }
}
