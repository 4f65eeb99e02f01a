use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// The 0 and 1 endpoints of a type, for the unit-interval markers.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Orders `value` against both endpoints.
fn endpoints<T: UnitBounds>(value: &T) -> ConstraintResult<(Ordering, Ordering)> {
    value
        .partial_cmp(&T::zero())
        .zip(value.partial_cmp(&T::one()))
        .ok_or(ConstraintError::NotANumber)
}

/// Accepts `0 < x <= 1`.
///
/// Discharge coefficients and the shaft-to-chamber diameter ratio use this
/// bound: zero describes no orifice or no shaft, and neither can exceed one.
///
/// ```
/// use pintle_sizing::support::constraint::UnitIntervalLowerOpen;
///
/// assert!(UnitIntervalLowerOpen::new(0.65).is_ok());
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// # Errors
    ///
    /// [`ConstraintError::BelowMinimum`] at or below zero,
    /// [`ConstraintError::AboveMaximum`] above one, and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> ConstraintResult<()> {
        match endpoints(value)? {
            (Ordering::Less | Ordering::Equal, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Accepts `0 <= x < 1`.
///
/// Used for the film-cooling fraction. Zero film is allowed, but diverting
/// every bit of fuel would leave the pintle annulus dry.
///
/// ```
/// use pintle_sizing::support::constraint::UnitIntervalUpperOpen;
///
/// assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
/// assert!(UnitIntervalUpperOpen::new(0.05).is_ok());
/// assert!(UnitIntervalUpperOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl UnitIntervalUpperOpen {
    /// # Errors
    ///
    /// [`ConstraintError::BelowMinimum`] below zero,
    /// [`ConstraintError::AboveMaximum`] at or above one, and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> ConstraintResult<()> {
        match endpoints(value)? {
            (Ordering::Less, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater | Ordering::Equal) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discharge_coefficients() {
        assert!(UnitIntervalLowerOpen::new(0.61).is_ok());
        assert_eq!(
            UnitIntervalLowerOpen::check(&0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::check(&1.000_000_1),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn film_fractions() {
        assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
        assert!(UnitIntervalUpperOpen::new(Ratio::new::<ratio>(0.2)).is_ok());
        assert_eq!(
            UnitIntervalUpperOpen::check(&-0.01),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalUpperOpen::check(&1.0),
            Err(ConstraintError::AboveMaximum)
        );
    }
}
