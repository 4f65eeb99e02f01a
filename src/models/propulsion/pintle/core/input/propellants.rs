/// The oxidizer and fuel fed to the injector.
///
/// Fluids are usually marker types such as
/// [`Oxygen`](crate::support::thermo::fluid::Oxygen), so this is often just
/// `Propellants::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Propellants<Ox, Fuel> {
    pub oxidizer: Ox,
    pub fuel: Fuel,
}
