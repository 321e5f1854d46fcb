/// hydroscore: goodness-of-fit statistics for rainfall-runoff calibration.
///
/// Scores a simulated discharge series against observations with the
/// standard hydrological set (NSE, KGE, PBIAS, RMSE, RSR, Pearson r).
pub mod calibration;
pub mod constants;
pub mod error;
pub mod evaluate;
pub mod metrics;
pub mod report;
pub mod series;
pub mod warmup;

pub use calibration::{score_run, score_series, Simulator};
pub use error::{CalibrationError, EvalError, EvalResult, WarmupError};
pub use evaluate::evaluate;
pub use report::{PerformanceReport, Statistic};
pub use series::TimeSeriesPair;
pub use warmup::WarmupPolicy;
