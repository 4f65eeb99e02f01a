use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::support::thermo::model::incompressible::{IncompressibleFluid, IncompressibleParameters};

/// Nitrous oxide.
///
/// The constant liquid density is the saturated value at 20 °C. Self-pressurized
/// nitrous oxide is close to its critical point in most feed systems, so prefer
/// the `coolprop` model when sizing against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NitrousOxide;

impl IncompressibleFluid for NitrousOxide {
    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters::new(
            MassDensity::new::<kilogram_per_cubic_meter>(786.0),
            182.33,
            309.52,
        )
    }
}

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for NitrousOxide {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "NitrousOxide";
}
