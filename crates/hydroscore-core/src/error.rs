//! Error types for evaluation, warm-up configuration and run scoring.

use thiserror::Error;

/// Fatal outcomes of an evaluation. No statistics are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Observed and simulated series have different lengths.
    #[error("dimension of observed ({observed}) and simulated ({simulated}) series do not agree")]
    DimensionMismatch { observed: usize, simulated: usize },

    /// Every observed value is missing, or the series are empty.
    #[error("no valid data in observed series")]
    NoValidData,
}

/// Result alias for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Invalid warm-up configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WarmupError {
    /// Trimming `warmup_steps` from a series of `min_length` would leave nothing to score.
    #[error("warm-up of {warmup_steps} steps leaves no scoring window for series of length {min_length}")]
    EmptyWindow {
        warmup_steps: usize,
        min_length: usize,
    },
}

/// Failure while scoring a simulated run against observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    /// The simulator returned a series of the wrong length.
    #[error("simulator returned {actual} time steps, expected {expected}")]
    SimulationLength { expected: usize, actual: usize },

    /// The trimmed series could not be evaluated.
    #[error("evaluation failed")]
    Eval(#[from] EvalError),
}
