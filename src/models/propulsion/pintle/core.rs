//! Grid search over radial orifice counts for a pintle injector.
//!
//! The oxidizer leaves the pintle shaft radially through `n` equal holes and
//! the fuel flows axially through the annulus around the shaft. For each
//! candidate hole count the search:
//!
//! 1. sizes the total oxidizer orifice area from the sharp-edged orifice
//!    equation and splits it over `n` holes,
//! 2. snaps the per-hole diameter to the nearest drill in the catalog and
//!    recomputes the real orifice area from the snapped size,
//! 3. derives both exit velocities, the total momentum ratio (TMR), the
//!    blockage factor and the local momentum ratio (LMR),
//! 4. keeps the configuration only if TMR and LMR fall inside the acceptance
//!    window.
//!
//! The catalog snap makes the objective discontinuous in diameter, so the
//! search enumerates hole counts instead of iterating a solver.
//!
//! Propellant densities are resolved once, before the first candidate, and a
//! property failure aborts the whole run.

mod config;
mod error;
mod input;
mod ranking;
mod search;
mod traits;

#[cfg(test)]
mod test_support;

pub use config::{AcceptanceWindow, HoleCountRange, Interval, SearchConfig};
pub use error::{ConfigError, Propellant, SizingError};
pub use input::{
    GeometryParameters, OperatingMode, OperatingPoint, PressureDrops, Propellants, SizingInput,
};
pub use ranking::{Ranking, Report, ReportRow};
pub use search::{Candidate, FlowConditions, Sizing, size};
pub use traits::PintleThermoModel;
