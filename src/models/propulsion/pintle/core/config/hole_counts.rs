use crate::models::propulsion::pintle::core::ConfigError;

/// Hole counts visited by the search: `min, min + step, ..` up to and
/// including `max`.
///
/// The step only controls how densely the space is sampled. A range with
/// `min > max` is valid and visits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCountRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for HoleCountRange {
    fn default() -> Self {
        Self {
            min: 10,
            max: 118,
            step: 2,
        }
    }
}

impl HoleCountRange {
    /// Checks that the range can be iterated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroHoleCount`] if `min` is zero, or
    /// [`ConfigError::ZeroHoleStep`] if `step` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::ZeroHoleCount);
        }
        if self.step == 0 {
            return Err(ConfigError::ZeroHoleStep);
        }
        Ok(())
    }

    /// Iterates over the hole counts in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + use<> {
        (self.min..=self.max).step_by(self.step.max(1) as usize)
    }

    /// Number of hole counts the range visits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}
