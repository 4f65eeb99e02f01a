use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::support::thermo::model::incompressible::{IncompressibleFluid, IncompressibleParameters};

/// Ethanol, the default hotfire fuel.
///
/// Density is the 20 °C value. The liquid range runs from the melting point
/// to the critical temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ethanol;

impl IncompressibleFluid for Ethanol {
    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters::new(
            MassDensity::new::<kilogram_per_cubic_meter>(789.0),
            159.0,
            513.9,
        )
    }
}

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for Ethanol {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Ethanol";
}
