use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::support::thermo::model::incompressible::{IncompressibleFluid, IncompressibleParameters};

/// Oxygen, the default hotfire oxidizer.
///
/// Density is that of LOX near its normal boiling point. The liquid range
/// spans the triple point to the critical point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Oxygen;

impl IncompressibleFluid for Oxygen {
    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters::new(
            MassDensity::new::<kilogram_per_cubic_meter>(1141.0),
            54.36,
            154.58,
        )
    }
}

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for Oxygen {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Oxygen";
}
