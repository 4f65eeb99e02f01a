mod hole_counts;
mod window;

pub use hole_counts::HoleCountRange;
pub use window::{AcceptanceWindow, Interval};

/// Search-space and acceptance settings for a sizing run.
///
/// These are tuning knobs, independent of the injector design point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchConfig {
    pub holes: HoleCountRange,
    pub window: AcceptanceWindow,
}
