//! The hole-count sweep.

mod candidate;
mod conditions;

pub use candidate::Candidate;
pub use conditions::FlowConditions;

use uom::si::length::millimeter;

use crate::support::drill::DrillCatalog;

use super::{SearchConfig, SizingError, SizingInput, traits::PintleThermoModel};

use candidate::Trial;

/// Accepted configurations of one sizing run, in sweep order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sizing {
    pub flow: FlowConditions,
    pub candidates: Vec<Candidate>,

    /// Number of hole counts evaluated, accepted or not.
    pub evaluated: usize,
}

/// Sweeps the configured hole counts and keeps every accepted configuration.
///
/// Densities are resolved once up front, so a property failure aborts before
/// any hole count is evaluated. An empty [`Sizing::candidates`] is a valid
/// outcome, not an error.
///
/// # Errors
///
/// Returns a [`SizingError`] if the input or hole range is invalid, or if a
/// propellant density cannot be resolved.
pub fn size<Ox, Fuel>(
    input: &SizingInput<Ox, Fuel>,
    config: &SearchConfig,
    thermo_ox: &impl PintleThermoModel<Ox>,
    thermo_fuel: &impl PintleThermoModel<Fuel>,
    catalog: &DrillCatalog,
) -> Result<Sizing, SizingError>
where
    Ox: Clone,
    Fuel: Clone,
{
    config.holes.validate()?;
    let flow = FlowConditions::resolve(input, thermo_ox, thermo_fuel)?;

    if config.window.is_empty() {
        tracing::warn!(
            window = ?config.window,
            "acceptance window is empty, no configuration can pass"
        );
    }

    let mut candidates = Vec::new();
    let mut evaluated = 0;

    for holes in config.holes.iter() {
        let trial = Trial::evaluate(holes, &flow, catalog);
        let accepted = trial.is_accepted(&config.window);
        evaluated += 1;

        tracing::debug!(
            holes,
            diameter_mm = trial.diameter.get::<millimeter>(),
            tmr = trial.tmr,
            lmr = trial.lmr,
            accepted,
            "evaluated hole count"
        );

        if accepted {
            candidates.push(trial.into_candidate());
        }
    }

    tracing::info!(
        evaluated,
        accepted = candidates.len(),
        "pintle sizing search complete"
    );

    Ok(Sizing {
        flow,
        candidates,
        evaluated,
    })
}
