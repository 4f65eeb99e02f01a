use uom::si::{f64::Pressure, pressure::psi};

/// Test campaign an injector is sized for.
///
/// The campaign fixes the operating point presets and how stiff the
/// injector must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingMode {
    /// Live propellants firing into a pressurized chamber.
    #[default]
    Hotfire,

    /// Water through both sides, exhausting to ambient.
    WaterTest,
}

impl OperatingMode {
    /// Injector pressure drop applied to each propellant side.
    ///
    /// A hotfire uses 20% of chamber pressure. A water test uses 80% of
    /// chamber pressure but never less than 40 psi, since chamber pressure is
    /// only ambient.
    #[must_use]
    pub fn injector_pressure_drop(self, chamber_pressure: Pressure) -> Pressure {
        match self {
            Self::Hotfire => 0.2 * chamber_pressure,
            Self::WaterTest => (0.8 * chamber_pressure).max(Pressure::new::<psi>(40.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pascal;

    #[test]
    fn hotfire_drop_scales_with_chamber_pressure() {
        let drop = OperatingMode::Hotfire.injector_pressure_drop(Pressure::new::<psi>(300.0));
        assert_relative_eq!(drop.get::<psi>(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn water_test_drop_has_a_floor() {
        let ambient = Pressure::new::<pascal>(101_352.932);
        let drop = OperatingMode::WaterTest.injector_pressure_drop(ambient);
        assert_relative_eq!(drop.get::<psi>(), 40.0, max_relative = 1e-12);

        let pressurized = Pressure::new::<psi>(100.0);
        let drop = OperatingMode::WaterTest.injector_pressure_drop(pressurized);
        assert_relative_eq!(drop.get::<psi>(), 80.0, max_relative = 1e-12);
    }
}
