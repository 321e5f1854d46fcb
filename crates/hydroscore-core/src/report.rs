//! Evaluation output: six named statistics with an explicit undefined state.

use std::fmt;

use crate::constants::{
    N_STATS, REPORT_PRECISION, REPORT_VALUE_WIDTH, STAT_NAMES, UNDEFINED_LABEL,
};

/// A single goodness-of-fit value.
///
/// `Undefined` marks a statistic whose denominator vanished for the given
/// input (constant or zero-sum observations). Values built through
/// [`Statistic::new`], [`Statistic::ratio`] or [`Statistic::map`] are always
/// finite; constructing `Statistic::Value` directly skips that check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statistic {
    Value(f64),
    Undefined,
}

impl Statistic {
    /// Wrap a computed value. Non-finite results become `Undefined`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Statistic::Value(value)
        } else {
            Statistic::Undefined
        }
    }

    /// `numerator / denominator`, or `Undefined` when the denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Statistic::Undefined;
        }
        Self::new(numerator / denominator)
    }

    /// Apply `f` to a defined value.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Statistic::Value(v) => Self::new(f(v)),
            Statistic::Undefined => Statistic::Undefined,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Statistic::Value(v) => Some(v),
            Statistic::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Statistic::Value(_))
    }
}

impl From<Statistic> for Option<f64> {
    fn from(stat: Statistic) -> Self {
        stat.value()
    }
}

/// Width and precision flags are applied to the number; `Undefined` is
/// padded to the same width and right-aligned unless asked otherwise.
impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Value(v) => fmt::Display::fmt(v, f),
            Statistic::Undefined => {
                // `pad` would truncate the label to the precision.
                let width = f.width().unwrap_or(0);
                match f.align() {
                    Some(fmt::Alignment::Left) => write!(f, "{UNDEFINED_LABEL:<width$}"),
                    Some(fmt::Alignment::Center) => write!(f, "{UNDEFINED_LABEL:^width$}"),
                    _ => write!(f, "{UNDEFINED_LABEL:>width$}"),
                }
            }
        }
    }
}

/// Goodness-of-fit of one simulated series against observations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceReport {
    /// Number of (observed, simulated) pairs scored.
    pub n: usize,
    /// Nash-Sutcliffe Efficiency. Optimum 1.
    pub nse: Statistic,
    /// Kling-Gupta Efficiency. Optimum 1.
    pub kge: Statistic,
    /// Percent bias. Optimum 0, positive = underestimation.
    pub pbias: Statistic,
    /// Root mean square error. Optimum 0.
    pub rmse: Statistic,
    /// RMSE-observations standard deviation ratio. Optimum 0.
    pub rsr: Statistic,
    /// Pearson correlation coefficient. Optimum 1.
    pub r: Statistic,
}

impl PerformanceReport {
    /// Statistics as `(name, value)` in NSE, KGE, PBIAS, RMSE, RSR, R order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Statistic)> {
        STAT_NAMES.into_iter().zip(self.to_array())
    }

    pub fn to_array(&self) -> [Statistic; N_STATS] {
        [self.nse, self.kge, self.pbias, self.rmse, self.rsr, self.r]
    }

    /// Look up a statistic by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<Statistic> {
        self.iter()
            .find(|(stat_name, _)| stat_name.eq_ignore_ascii_case(name))
            .map(|(_, stat)| stat)
    }

    /// `true` when every statistic could be computed.
    pub fn is_complete(&self) -> bool {
        self.to_array().iter().all(|s| s.is_defined())
    }
}

/// Fixed-width summary block for text display.
impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Performance")?;
        writeln!(f, "=================")?;
        write!(f, "{:<6}= {:>w$}", "n", self.n, w = REPORT_VALUE_WIDTH)?;
        for (name, stat) in self.iter() {
            write!(
                f,
                "\n{:<6}= {:>w$.p$}",
                name,
                stat,
                w = REPORT_VALUE_WIDTH,
                p = REPORT_PRECISION
            )?;
        }
        Ok(())
    }
}
