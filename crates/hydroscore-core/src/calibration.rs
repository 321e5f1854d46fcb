//! Scoring simulated runs during manual calibration.
//!
//! The hydrological engine is opaque here: anything implementing
//! [`Simulator`] maps forcing and a parameter set to a discharge series of
//! the same length as the forcing.

use tracing::debug;

use crate::error::{CalibrationError, EvalError};
use crate::evaluate::evaluate;
use crate::report::PerformanceReport;
use crate::warmup::WarmupPolicy;

/// A rainfall-runoff model treated as a black box.
pub trait Simulator {
    /// Meteorological input (precipitation, temperature, PET, ...).
    type Forcing: ?Sized;
    /// Parameter set being calibrated.
    type Params;

    /// Simulated discharge, one value per forcing time step.
    fn simulate(&self, forcing: &Self::Forcing, params: &Self::Params) -> Vec<f64>;
}

/// Run `simulator` and score its output against `observed`.
///
/// The same warm-up window is cut from both series before evaluation.
pub fn score_run<S: Simulator>(
    simulator: &S,
    forcing: &S::Forcing,
    params: &S::Params,
    observed: &[f64],
    policy: &WarmupPolicy,
) -> Result<PerformanceReport, CalibrationError> {
    let simulated = simulator.simulate(forcing, params);
    if simulated.len() != observed.len() {
        return Err(CalibrationError::SimulationLength {
            expected: observed.len(),
            actual: simulated.len(),
        });
    }
    score_series(observed, &simulated, policy)
}

/// Score an already simulated series, cutting the warm-up window first.
pub fn score_series(
    observed: &[f64],
    simulated: &[f64],
    policy: &WarmupPolicy,
) -> Result<PerformanceReport, CalibrationError> {
    if observed.len() != simulated.len() {
        return Err(EvalError::DimensionMismatch {
            observed: observed.len(),
            simulated: simulated.len(),
        }
        .into());
    }
    let window = policy.window(observed.len());
    let report = evaluate(&observed[window.clone()], &simulated[window.clone()])?;
    debug!(
        start = window.start,
        end = window.end,
        n = report.n,
        "scored simulated run"
    );
    Ok(report)
}
