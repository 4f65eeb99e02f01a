//! Numeric bounds checked once, at construction.
//!
//! A sizing run is only meaningful for physical inputs: positive pressures
//! and mass flows, a discharge coefficient no larger than one, a film-cooling
//! fraction that leaves some fuel for the pintle. The markers here name those
//! bounds so they can be checked once and carried in the type afterwards.
//!
//! | Marker                     | Accepts       |
//! |----------------------------|---------------|
//! | [`StrictlyPositive`]       | `x > 0`       |
//! | [`UnitIntervalLowerOpen`]  | `0 < x <= 1`  |
//! | [`UnitIntervalUpperOpen`]  | `0 <= x < 1`  |
//!
//! Markers are used either directly, through [`Constraint::check`], or as the
//! `C` parameter of [`Constrained<T, C>`].

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen, UnitIntervalUpperOpen};

/// A bound that values of type `T` can be checked against.
pub trait Constraint<T> {
    /// Checks `value` against the bound.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how the bound was missed.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value missed its bound.
///
/// `NaN` never satisfies a bound and is reported as [`NotANumber`].
///
/// [`NotANumber`]: ConstraintError::NotANumber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("must be positive, got a negative value")]
    Negative,
    #[error("must be positive, got zero")]
    Zero,
    #[error("got NaN")]
    NotANumber,
    #[error("below the lower bound")]
    BelowMinimum,
    #[error("above the upper bound")]
    AboveMaximum,
}

/// Result of a constraint check or a constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use pintle_sizing::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Pressure, pressure::psi};
///
/// let pc = Constrained::<_, StrictlyPositive>::new(Pressure::new::<psi>(300.0)).unwrap();
/// assert!((pc.into_inner().get::<psi>() - 300.0).abs() < 1e-9);
///
/// assert!(Constrained::<_, StrictlyPositive>::new(Pressure::new::<psi>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _bound: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] from `C` if `value` misses the bound.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value).map(|()| Self {
            value,
            _bound: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
