mod report;

pub use report::{Report, ReportRow};

use super::{AcceptanceWindow, Candidate, FlowConditions, Sizing};

/// Accepted configurations ordered best first.
///
/// Candidates are ordered by how far their LMR lies from the midpoint of the
/// TMR acceptance interval. Comparing an LMR against a TMR target matches the
/// established sizing procedure; ties keep sweep order, so fewer holes win.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    flow: FlowConditions,
    candidates: Vec<Candidate>,
    evaluated: usize,
    target: f64,
}

impl Ranking {
    /// Orders the accepted configurations of a sizing run.
    #[must_use]
    pub fn new(sizing: Sizing, window: &AcceptanceWindow) -> Self {
        let Sizing {
            flow,
            mut candidates,
            evaluated,
        } = sizing;

        let target = window.tmr.midpoint();
        candidates.sort_by(|a, b| (a.lmr - target).abs().total_cmp(&(b.lmr - target).abs()));

        Self {
            flow,
            candidates,
            evaluated,
            target,
        }
    }

    /// Value each candidate's LMR is compared against.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn flow(&self) -> &FlowConditions {
        &self.flow
    }

    /// All accepted candidates, best first.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Number of hole counts the search evaluated.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Summarizes the `top` best candidates for display.
    ///
    /// Returns [`Report::NoAcceptableConfiguration`] when nothing was
    /// accepted.
    #[must_use]
    pub fn report(&self, top: usize) -> Report {
        if self.candidates.is_empty() {
            return Report::NoAcceptableConfiguration {
                evaluated: self.evaluated,
            };
        }

        let rows = self
            .candidates
            .iter()
            .take(top)
            .enumerate()
            .map(|(index, candidate)| ReportRow::new(index + 1, candidate))
            .collect();

        Report::Configurations {
            accepted: self.candidates.len(),
            rows,
        }
    }
}
