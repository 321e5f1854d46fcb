/// Aligned observed/simulated discharge series.
///
/// Both slices share one time index. Steps with a missing observation
/// (NaN) are skipped pairwise, so the i-th valid observed value is always
/// compared with the simulated value from the same original time step.
use crate::error::{EvalError, EvalResult};

#[derive(Debug, Clone, Copy)]
pub struct TimeSeriesPair<'a> {
    observed: &'a [f64],
    simulated: &'a [f64],
    valid: usize,
}

impl<'a> TimeSeriesPair<'a> {
    /// Pair two series for evaluation.
    ///
    /// Validates:
    /// - observed and simulated have the same length
    /// - at least one observed value is not NaN
    pub fn new(observed: &'a [f64], simulated: &'a [f64]) -> EvalResult<Self> {
        if observed.len() != simulated.len() {
            return Err(EvalError::DimensionMismatch {
                observed: observed.len(),
                simulated: simulated.len(),
            });
        }
        let valid = observed.iter().filter(|o| !o.is_nan()).count();
        if valid == 0 {
            return Err(EvalError::NoValidData);
        }
        Ok(Self {
            observed,
            simulated,
            valid,
        })
    }

    /// `(observed, simulated)` for every step with a defined observation,
    /// in time order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.observed
            .iter()
            .zip(self.simulated)
            .filter(|(o, _)| !o.is_nan())
            .map(|(&o, &s)| (o, s))
    }

    /// Number of time steps, missing observations included.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Returns `true` if there are no time steps.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Number of pairs that take part in the statistics.
    pub fn valid_len(&self) -> usize {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pair() {
        let pair = TimeSeriesPair::new(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]).unwrap();
        assert_eq!(pair.len(), 3);
        assert_eq!(pair.valid_len(), 3);
        assert!(!pair.is_empty());
    }

    // -- Validation: length mismatch --

    #[test]
    fn rejects_length_mismatch() {
        let err = TimeSeriesPair::new(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            EvalError::DimensionMismatch {
                observed: 3,
                simulated: 2
            }
        );
    }

    #[test]
    fn length_mismatch_wins_over_missing_data() {
        let err = TimeSeriesPair::new(&[f64::NAN], &[]).unwrap_err();
        assert!(matches!(err, EvalError::DimensionMismatch { .. }));
    }

    // -- Validation: no usable observations --

    #[test]
    fn rejects_all_nan_observed() {
        let err = TimeSeriesPair::new(&[f64::NAN, f64::NAN], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, EvalError::NoValidData);
    }

    #[test]
    fn rejects_empty_series() {
        let err = TimeSeriesPair::new(&[], &[]).unwrap_err();
        assert_eq!(err, EvalError::NoValidData);
    }

    // -- Pairwise filtering --

    #[test]
    fn nan_observation_drops_the_same_simulated_step() {
        let obs = [1.0, f64::NAN, 3.0];
        let sim = [10.0, 20.0, 30.0];
        let pair = TimeSeriesPair::new(&obs, &sim).unwrap();
        let pairs: Vec<_> = pair.pairs().collect();
        assert_eq!(pairs, vec![(1.0, 10.0), (3.0, 30.0)]);
        assert_eq!(pair.valid_len(), 2);
        assert_eq!(pair.len(), 3);
    }

    #[test]
    fn nan_in_simulated_is_kept() {
        let obs = [1.0, 2.0];
        let sim = [f64::NAN, 2.0];
        let pair = TimeSeriesPair::new(&obs, &sim).unwrap();
        assert_eq!(pair.valid_len(), 2);
        assert!(pair.pairs().next().unwrap().1.is_nan());
    }
}
