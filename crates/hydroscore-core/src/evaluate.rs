//! Model performance evaluation.

use crate::error::EvalResult;
use crate::metrics::Moments;
use crate::report::PerformanceReport;
use crate::series::TimeSeriesPair;

/// Score a simulated series against observations.
///
/// Time steps with a NaN observation are dropped from both series before
/// any statistic is computed. Statistics whose denominator is zero for this
/// input are reported as [`Statistic::Undefined`](crate::Statistic::Undefined).
///
/// # Errors
///
/// - [`EvalError::DimensionMismatch`](crate::EvalError::DimensionMismatch)
///   if the two series differ in length.
/// - [`EvalError::NoValidData`](crate::EvalError::NoValidData) if no
///   observation is left after dropping NaNs.
pub fn evaluate(observed: &[f64], simulated: &[f64]) -> EvalResult<PerformanceReport> {
    let pair = TimeSeriesPair::new(observed, simulated)?;
    Ok(Moments::accumulate(&pair).report())
}
