use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Accepts values greater than zero.
///
/// Chamber pressure, mass flow, injector pressure drops and resolved
/// densities all pass through this check before the sweep starts.
///
/// ```
/// use pintle_sizing::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.944).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Wraps `value` once it is known to be above zero.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::Zero`], [`ConstraintError::Negative`] or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> ConstraintResult<()> {
        let ordering = value
            .partial_cmp(&T::zero())
            .ok_or(ConstraintError::NotANumber)?;
        match ordering {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}
