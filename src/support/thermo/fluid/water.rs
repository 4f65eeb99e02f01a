use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::support::thermo::model::incompressible::{IncompressibleFluid, IncompressibleParameters};

/// Water, used for both propellants in cold-flow tests.
///
/// Density is the 25 °C value at one atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl IncompressibleFluid for Water {
    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters::new(
            MassDensity::new::<kilogram_per_cubic_meter>(997.047),
            273.16,
            647.1,
        )
    }
}

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for Water {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Water";
}
