use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Failures of the [`CoolProp`](super::CoolProp) model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Backend(#[from] rfluids::native::CoolPropError),

    /// A previous evaluation panicked while holding the backend state.
    #[error("backend state is poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        let context = error.to_string();
        match error {
            CoolPropError::Backend(_) => classify(context),
            CoolPropError::Poisoned => Self::Calculation { context },
        }
    }
}

/// Kinds of backend failure, recognized by fragments of the message text.
///
/// The backend only reports strings, so this is a best-effort match checked
/// in order. Unrecognized messages become [`PropertyError::Calculation`].
const MESSAGE_KINDS: &[(Kind, &[&str])] = &[
    (Kind::Undefined, &["not defined"]),
    (
        Kind::OutOfDomain,
        &[
            "not in range",
            "out of range",
            "outside the range of validity",
            "must be in range",
            "must be between",
            "quality must be",
        ],
    ),
    (
        Kind::InvalidState,
        &["not a valid number", "invalid state", "invalid number"],
    ),
];

#[derive(Clone, Copy)]
enum Kind {
    Undefined,
    OutOfDomain,
    InvalidState,
}

fn classify(context: String) -> PropertyError {
    let lowered = context.to_lowercase();
    let kind = MESSAGE_KINDS
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| lowered.contains(f)))
        .map(|&(kind, _)| kind);

    match kind {
        Some(Kind::Undefined) => PropertyError::Undefined { context },
        Some(Kind::OutOfDomain) => PropertyError::OutOfDomain { context },
        Some(Kind::InvalidState) => PropertyError::InvalidState { context },
        None => PropertyError::Calculation { context },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(message: &str) -> PropertyError {
        classify(message.to_string())
    }

    #[test]
    fn two_phase_density_is_undefined() {
        assert!(matches!(
            kind_of("DMass is not defined inside the two-phase region"),
            PropertyError::Undefined { .. }
        ));
    }

    #[test]
    fn combustion_temperature_is_out_of_range() {
        assert!(matches!(
            kind_of("Temperature to PT_flash [3298 K] must be in range [159 K, 650 K]"),
            PropertyError::OutOfDomain { .. }
        ));
    }

    #[test]
    fn nan_pressure_is_an_invalid_state() {
        assert!(matches!(
            kind_of("p [nan] is not a valid number"),
            PropertyError::InvalidState { .. }
        ));
    }

    #[test]
    fn anything_else_is_a_calculation_failure() {
        let error = kind_of("phase envelope failed to converge");
        assert_eq!(
            error,
            PropertyError::Calculation {
                context: "phase envelope failed to converge".to_string()
            }
        );
    }

    #[test]
    fn poisoned_state_keeps_its_message() {
        let error = PropertyError::from(CoolPropError::Poisoned);
        assert_eq!(error.to_string(), "property evaluation failed: backend state is poisoned");
    }
}
