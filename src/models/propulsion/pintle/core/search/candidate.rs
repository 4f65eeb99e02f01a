use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    f64::{Angle, Area, Length, Ratio, Velocity},
    ratio::ratio,
};

use crate::{models::propulsion::pintle::core::AcceptanceWindow, support::drill::DrillCatalog};

use super::FlowConditions;

/// An accepted injector configuration.
///
/// All derived quantities use the snapped drill diameter, not the
/// theoretical one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub holes: u32,

    /// Per-hole diameter before snapping to the catalog.
    pub theoretical_diameter: Length,

    /// Per-hole diameter of the drill actually used.
    pub diameter: Length,

    /// Total oxidizer orifice area, `n · π d² / 4`.
    pub oxidizer_area: Area,

    /// Radial thickness of the fuel annulus around the shaft.
    pub annular_gap: Length,

    pub fuel_area: Area,
    pub oxidizer_velocity: Velocity,
    pub fuel_velocity: Velocity,

    /// Total momentum ratio, oxidizer over pintle fuel.
    pub tmr: f64,

    /// Fraction of the shaft circumference covered by holes. Above one the
    /// holes need a second row.
    pub blockage_factor: f64,

    /// Local momentum ratio, `tmr / blockage_factor`.
    pub lmr: f64,

    /// Estimated spray angle of the impinging sheet.
    pub spray_angle: Angle,
}

/// A hole count evaluated up to, but not including, the spray angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Trial {
    pub(super) holes: u32,
    pub(super) theoretical_diameter: Length,
    pub(super) diameter: Length,
    pub(super) oxidizer_area: Area,
    pub(super) annular_gap: Length,
    pub(super) fuel_area: Area,
    pub(super) oxidizer_velocity: Velocity,
    pub(super) fuel_velocity: Velocity,
    pub(super) tmr: f64,
    pub(super) blockage_factor: f64,
    pub(super) lmr: f64,
}

impl Trial {
    /// Sizes `holes` orifices, snaps them to the catalog, and derives the
    /// momentum ratios from the snapped geometry.
    pub(super) fn evaluate(holes: u32, flow: &FlowConditions, catalog: &DrillCatalog) -> Self {
        let n = f64::from(holes);

        let theoretical_diameter = theoretical_diameter(required_oxidizer_area(flow), holes);
        let diameter = catalog.nearest(theoretical_diameter);
        let radius = 0.5 * diameter;
        let oxidizer_area: Area = n * PI * radius * radius;
        let oxidizer_velocity: Velocity =
            flow.oxidizer_mass_flow / (oxidizer_area * flow.oxidizer_density);

        let annular_gap = annular_gap(flow, diameter);
        let inner = flow.shaft_radius();
        let outer = inner + annular_gap;
        let fuel_area: Area = PI * (outer * outer - inner * inner);
        let fuel_velocity: Velocity = flow.pintle_fuel_mass_flow / (fuel_area * flow.fuel_density);

        let tmr: Ratio = (flow.oxidizer_mass_flow * oxidizer_velocity)
            / (flow.pintle_fuel_mass_flow * fuel_velocity);
        let blockage_factor: Ratio = n * diameter / (PI * flow.shaft_diameter);
        let tmr = tmr.get::<ratio>();
        let blockage_factor = blockage_factor.get::<ratio>();

        Self {
            holes,
            theoretical_diameter,
            diameter,
            oxidizer_area,
            annular_gap,
            fuel_area,
            oxidizer_velocity,
            fuel_velocity,
            tmr,
            blockage_factor,
            lmr: tmr / blockage_factor,
        }
    }

    pub(super) fn is_accepted(&self, window: &AcceptanceWindow) -> bool {
        window.accepts(self.tmr, self.lmr)
    }

    /// Completes the trial with its spray angle.
    pub(super) fn into_candidate(self) -> Candidate {
        Candidate {
            holes: self.holes,
            theoretical_diameter: self.theoretical_diameter,
            diameter: self.diameter,
            oxidizer_area: self.oxidizer_area,
            annular_gap: self.annular_gap,
            fuel_area: self.fuel_area,
            oxidizer_velocity: self.oxidizer_velocity,
            fuel_velocity: self.fuel_velocity,
            tmr: self.tmr,
            blockage_factor: self.blockage_factor,
            lmr: self.lmr,
            spray_angle: spray_angle(self.lmr),
        }
    }
}

/// Total oxidizer orifice area from the sharp-edged orifice equation,
/// `A = m / (cd · sqrt(2 ρ Δp))`.
fn required_oxidizer_area(flow: &FlowConditions) -> Area {
    let ideal_velocity: Velocity =
        (2.0 * flow.oxidizer_pressure_drop / flow.oxidizer_density).sqrt();
    flow.oxidizer_mass_flow
        / (flow.discharge_coefficient * flow.oxidizer_density * ideal_velocity)
}

/// Diameter of each of `holes` equal circles sharing `total_area`.
fn theoretical_diameter(total_area: Area, holes: u32) -> Length {
    2.0 * (total_area / (PI * f64::from(holes))).sqrt()
}

/// Fuel annulus thickness, `t = π ρ_ox d / (4 ρ_fuel OF²)`.
fn annular_gap(flow: &FlowConditions, diameter: Length) -> Length {
    let density_ratio: Ratio = flow.oxidizer_density / flow.fuel_density;
    let of = flow.mixture_ratio;
    PI * density_ratio.get::<ratio>() * diameter / (4.0 * of * of)
}

/// Empirical spray angle, `2 · 0.7 · atan(2 · LMR)`.
fn spray_angle(lmr: f64) -> Angle {
    Angle::new::<radian>(2.0 * 0.7 * (2.0 * lmr).atan())
}
