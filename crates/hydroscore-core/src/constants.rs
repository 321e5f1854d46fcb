//! Fixed values shared by the evaluator, the report and the warm-up policy.

// -- Warm-up defaults --

/// Time steps discarded at the start of a run to let model stores settle.
/// One year of daily data.
pub const DEFAULT_WARMUP_STEPS: usize = 365;

/// Shortest series for which the warm-up period is dropped. Shorter runs
/// are scored in full so a single year of data still yields a score.
pub const DEFAULT_MIN_LENGTH: usize = 730;

// -- Report layout --

/// Statistic names in canonical order.
pub const STAT_NAMES: [&str; N_STATS] = ["NSE", "KGE", "PBIAS", "RMSE", "RSR", "R"];

/// Number of statistics in a report.
pub const N_STATS: usize = 6;

/// Width of the value column in the formatted report.
pub const REPORT_VALUE_WIDTH: usize = 8;

/// Decimal places shown for statistic values in the formatted report.
pub const REPORT_PRECISION: usize = 2;

/// Placeholder rendered for an undefined statistic.
pub const UNDEFINED_LABEL: &str = "n/a";
