use std::fmt;

use serde::Serialize;
use uom::si::{
    angle::degree,
    area::{square_inch, square_meter},
    length::{inch, meter, millimeter},
    velocity::meter_per_second,
};

use crate::models::propulsion::pintle::core::Candidate;

/// Outcome of a sizing run, ready for display or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    /// The best configurations, `accepted` of which passed in total.
    Configurations {
        accepted: usize,
        rows: Vec<ReportRow>,
    },

    /// No hole count satisfied the acceptance window.
    NoAcceptableConfiguration { evaluated: usize },
}

/// One configuration in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    pub holes: u32,
    pub diameter_m: f64,
    pub diameter_mm: f64,
    pub diameter_in: f64,
    pub annular_gap_in: f64,
    pub tmr: f64,
    pub lmr: f64,
    pub blockage_factor: f64,
    pub spray_angle_deg: f64,
    pub oxidizer_velocity_m_per_s: f64,
    pub fuel_velocity_m_per_s: f64,
    pub oxidizer_area_m2: f64,
    pub oxidizer_area_in2: f64,
    pub fuel_area_m2: f64,
    pub fuel_area_in2: f64,
}

impl ReportRow {
    #[must_use]
    pub fn new(rank: usize, candidate: &Candidate) -> Self {
        Self {
            rank,
            holes: candidate.holes,
            diameter_m: candidate.diameter.get::<meter>(),
            diameter_mm: candidate.diameter.get::<millimeter>(),
            diameter_in: candidate.diameter.get::<inch>(),
            annular_gap_in: candidate.annular_gap.get::<inch>(),
            tmr: candidate.tmr,
            lmr: candidate.lmr,
            blockage_factor: candidate.blockage_factor,
            spray_angle_deg: candidate.spray_angle.get::<degree>(),
            oxidizer_velocity_m_per_s: candidate.oxidizer_velocity.get::<meter_per_second>(),
            fuel_velocity_m_per_s: candidate.fuel_velocity.get::<meter_per_second>(),
            oxidizer_area_m2: candidate.oxidizer_area.get::<square_meter>(),
            oxidizer_area_in2: candidate.oxidizer_area.get::<square_inch>(),
            fuel_area_m2: candidate.fuel_area.get::<square_meter>(),
            fuel_area_in2: candidate.fuel_area.get::<square_inch>(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAcceptableConfiguration { evaluated } => write!(
                f,
                "no configuration satisfied the acceptance window ({evaluated} hole counts evaluated)"
            ),
            Self::Configurations { accepted, rows } => {
                writeln!(
                    f,
                    "{:>4} {:>5} {:>8} {:>7} {:>8} {:>6} {:>6} {:>6} {:>7} {:>8} {:>8} {:>10} {:>10}",
                    "rank",
                    "holes",
                    "d [in]",
                    "d [mm]",
                    "gap [in]",
                    "TMR",
                    "LMR",
                    "BF",
                    "spray°",
                    "v_ox",
                    "v_fuel",
                    "A_ox [in²]",
                    "A_fu [in²]",
                )?;
                for row in rows {
                    writeln!(
                        f,
                        "{:>4} {:>5} {:>8.4} {:>7.3} {:>8.4} {:>6.3} {:>6.3} {:>6.3} {:>7.2} {:>8.2} {:>8.2} {:>10.5} {:>10.5}",
                        row.rank,
                        row.holes,
                        row.diameter_in,
                        row.diameter_mm,
                        row.annular_gap_in,
                        row.tmr,
                        row.lmr,
                        row.blockage_factor,
                        row.spray_angle_deg,
                        row.oxidizer_velocity_m_per_s,
                        row.fuel_velocity_m_per_s,
                        row.oxidizer_area_in2,
                        row.fuel_area_in2,
                    )?;
                }
                write!(f, "showing {} of {accepted} accepted configurations", rows.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::radian,
        f64::{Angle, Area, Length, Velocity},
    };

    fn candidate() -> Candidate {
        Candidate {
            holes: 40,
            theoretical_diameter: Length::new::<millimeter>(1.06),
            diameter: Length::new::<inch>(0.05),
            oxidizer_area: Area::new::<square_inch>(0.0785),
            annular_gap: Length::new::<inch>(0.005),
            fuel_area: Area::new::<square_inch>(0.0103),
            oxidizer_velocity: Velocity::new::<meter_per_second>(17.9),
            fuel_velocity: Velocity::new::<meter_per_second>(41.0),
            tmr: 1.38,
            blockage_factor: 0.81,
            lmr: 1.70,
            spray_angle: Angle::new::<radian>(1.8),
        }
    }

    #[test]
    fn row_uses_display_units() {
        let row = ReportRow::new(1, &candidate());

        assert_relative_eq!(row.diameter_in, 0.05, max_relative = 1e-12);
        assert_relative_eq!(row.diameter_mm, 1.27, max_relative = 1e-12);
        assert_relative_eq!(row.annular_gap_in, 0.005, max_relative = 1e-12);
        assert_relative_eq!(row.oxidizer_area_in2, 0.0785, max_relative = 1e-12);
        assert_relative_eq!(
            row.spray_angle_deg,
            1.8_f64.to_degrees(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn table_lists_every_row() {
        let report = Report::Configurations {
            accepted: 3,
            rows: vec![ReportRow::new(1, &candidate()), ReportRow::new(2, &candidate())],
        };

        let text = report.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().is_some_and(|header| header.contains("TMR")));
        assert!(text.ends_with("showing 2 of 3 accepted configurations"));
    }

    #[test]
    fn empty_outcome_is_stated() {
        let report = Report::NoAcceptableConfiguration { evaluated: 55 };
        assert!(report.to_string().starts_with("no configuration satisfied"));
    }

    #[test]
    fn serializes_with_an_outcome_tag() {
        let report = Report::Configurations {
            accepted: 1,
            rows: vec![ReportRow::new(1, &candidate())],
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"], "configurations");
        assert_eq!(json["rows"][0]["holes"], 40);

        let empty = serde_json::to_value(Report::NoAcceptableConfiguration { evaluated: 7 }).unwrap();
        assert_eq!(empty["outcome"], "no_acceptable_configuration");
        assert_eq!(empty["evaluated"], 7);
    }
}
