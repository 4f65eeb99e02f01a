use std::cmp::Ordering;

/// A closed interval `[min, max]` of a dimensionless metric.
///
/// An interval with `min > max`, or with a NaN bound, contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min <= value <= max`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(
            self.min.partial_cmp(&self.max),
            None | Some(Ordering::Greater)
        )
    }
}

/// Empirical acceptance ranges for the momentum ratios.
///
/// Defaults are TMR in `[0.9, 1.5]` and LMR in `[1.0, 3.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptanceWindow {
    pub tmr: Interval,
    pub lmr: Interval,
}

impl Default for AcceptanceWindow {
    fn default() -> Self {
        Self {
            tmr: Interval::new(0.9, 1.5),
            lmr: Interval::new(1.0, 3.0),
        }
    }
}

impl AcceptanceWindow {
    /// Returns `true` if both ratios lie inside their intervals.
    #[must_use]
    pub fn accepts(&self, tmr: f64, lmr: f64) -> bool {
        self.tmr.contains(tmr) && self.lmr.contains(lmr)
    }

    /// Returns `true` if no pair of ratios can be accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tmr.is_empty() || self.lmr.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let window = AcceptanceWindow::default();

        for (tmr, lmr, expected) in [
            (0.9, 1.0, true),
            (1.5, 3.0, true),
            (1.2, 2.0, true),
            (0.9 + 1e-12, 3.0 - 1e-12, true),
            (0.9 - 1e-12, 2.0, false),
            (1.5 + 1e-12, 2.0, false),
            (1.2, 1.0 - 1e-12, false),
            (1.2, 3.0 + 1e-12, false),
            (f64::NAN, 2.0, false),
        ] {
            assert_eq!(window.accepts(tmr, lmr), expected, "tmr={tmr}, lmr={lmr}");
        }
    }

    #[test]
    fn inverted_interval_accepts_nothing() {
        let window = AcceptanceWindow {
            tmr: Interval::new(1.5, 0.9),
            ..AcceptanceWindow::default()
        };

        assert!(window.is_empty());
        for tmr in [0.8, 0.9, 1.2, 1.5, 1.6] {
            assert!(!window.accepts(tmr, 2.0));
        }
    }

    #[test]
    fn degenerate_interval_holds_one_point() {
        let point = Interval::new(1.2, 1.2);
        assert!(!point.is_empty());
        assert!(point.contains(1.2));
        assert!(!point.contains(1.2 + 1e-12));
        assert!(Interval::new(f64::NAN, 1.0).is_empty());
    }

    #[test]
    fn midpoint_of_default_tmr() {
        assert!((AcceptanceWindow::default().tmr.midpoint() - 1.2).abs() < 1e-12);
    }
}
