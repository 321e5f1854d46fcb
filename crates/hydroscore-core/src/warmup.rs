/// Warm-up trimming applied before a run is scored.
///
/// The first time steps of a simulation reflect the initial stores rather
/// than the forcing, so they are excluded from the statistics once the
/// series is long enough to spare them.
use std::ops::Range;

use crate::constants::{DEFAULT_MIN_LENGTH, DEFAULT_WARMUP_STEPS};
use crate::error::WarmupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWarmupPolicy"))]
pub struct WarmupPolicy {
    warmup_steps: usize,
    min_length: usize,
}

impl WarmupPolicy {
    /// Drop `warmup_steps` leading steps from any series of at least
    /// `min_length` steps.
    ///
    /// Rejects configurations where a series of exactly `min_length` steps
    /// would have nothing left to score. A zero `warmup_steps` is always valid.
    pub fn new(warmup_steps: usize, min_length: usize) -> Result<Self, WarmupError> {
        if warmup_steps > 0 && warmup_steps >= min_length {
            return Err(WarmupError::EmptyWindow {
                warmup_steps,
                min_length,
            });
        }
        Ok(Self {
            warmup_steps,
            min_length,
        })
    }

    /// Score every time step.
    pub const fn none() -> Self {
        Self {
            warmup_steps: 0,
            min_length: 0,
        }
    }

    pub fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Index range of the scored window for a series of `len` steps.
    pub fn window(&self, len: usize) -> Range<usize> {
        if len >= self.min_length {
            self.warmup_steps.min(len)..len
        } else {
            0..len
        }
    }

    /// Slice of `series` that is scored.
    pub fn trim<'a>(&self, series: &'a [f64]) -> &'a [f64] {
        &series[self.window(series.len())]
    }
}

impl Default for WarmupPolicy {
    /// One year of daily steps, dropped once two years are available.
    fn default() -> Self {
        Self {
            warmup_steps: DEFAULT_WARMUP_STEPS,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWarmupPolicy {
    warmup_steps: usize,
    min_length: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWarmupPolicy> for WarmupPolicy {
    type Error = WarmupError;

    fn try_from(raw: RawWarmupPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.warmup_steps, raw.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drops_first_year_of_long_series() {
        let policy = WarmupPolicy::default();
        assert_eq!(policy.window(730), 365..730);
        assert_eq!(policy.window(1000), 365..1000);
    }

    #[test]
    fn default_keeps_short_series() {
        let policy = WarmupPolicy::default();
        assert_eq!(policy.window(729), 0..729);
        assert_eq!(policy.window(0), 0..0);
    }

    #[test]
    fn none_keeps_everything() {
        assert_eq!(WarmupPolicy::none().window(10), 0..10);
        assert_eq!(WarmupPolicy::none().window(0), 0..0);
    }

    #[test]
    fn trim_returns_window() {
        let policy = WarmupPolicy::new(2, 4).unwrap();
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(policy.trim(&series), &[3.0, 4.0, 5.0]);
        assert_eq!(policy.trim(&series[..3]), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_empty_window() {
        assert_eq!(
            WarmupPolicy::new(10, 10),
            Err(WarmupError::EmptyWindow {
                warmup_steps: 10,
                min_length: 10
            })
        );
        assert!(WarmupPolicy::new(11, 10).is_err());
    }

    #[test]
    fn zero_warmup_is_valid() {
        let policy = WarmupPolicy::new(0, 0).unwrap();
        assert_eq!(policy, WarmupPolicy::none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let ok: WarmupPolicy =
            serde_json::from_str(r#"{"warmup_steps": 30, "min_length": 60}"#).unwrap();
        assert_eq!(ok.window(60), 30..60);
        let bad = serde_json::from_str::<WarmupPolicy>(r#"{"warmup_steps": 60, "min_length": 30}"#);
        assert!(bad.is_err());
    }
}
