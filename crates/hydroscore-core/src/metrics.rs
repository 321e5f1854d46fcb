//! Hydrological goodness-of-fit statistics.
//!
//! All statistics are computed from [`Moments`], the fixed set of sums
//! gathered over the valid pairs of a [`TimeSeriesPair`]. A statistic whose
//! denominator vanishes is returned as [`Statistic::Undefined`].

use crate::report::{PerformanceReport, Statistic};
use crate::series::TimeSeriesPair;

/// Sums over the valid (observed, simulated) pairs.
///
/// Built in two passes over the pairs: means first, then the centred sums.
/// Nothing is materialised beyond these fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub n: usize,
    pub sum_obs: f64,
    pub mean_obs: f64,
    pub mean_sim: f64,
    /// Σ(o - ō)²
    pub ss_obs: f64,
    /// Σ(s - s̄)²
    pub ss_sim: f64,
    /// Σ(o - ō)(s - s̄)
    pub cross: f64,
    /// Σ(o - s)²
    pub sse: f64,
    /// Σ(o - s)
    pub residual_sum: f64,
}

impl Moments {
    pub fn accumulate(pair: &TimeSeriesPair<'_>) -> Self {
        let mut n = 0usize;
        let mut sum_obs = 0.0;
        let mut sum_sim = 0.0;
        let mut first: Option<(f64, f64)> = None;
        let mut obs_constant = true;
        let mut sim_constant = true;

        for (o, s) in pair.pairs() {
            n += 1;
            sum_obs += o;
            sum_sim += s;
            match first {
                None => {
                    first = Some((o, s));
                    sim_constant = !s.is_nan();
                }
                Some((o0, s0)) => {
                    obs_constant &= o == o0;
                    sim_constant &= s == s0;
                }
            }
        }

        let nf = n as f64;
        let mean_obs = sum_obs / nf;
        let mean_sim = sum_sim / nf;

        let mut ss_obs = 0.0;
        let mut ss_sim = 0.0;
        let mut cross = 0.0;
        let mut sse = 0.0;
        let mut residual_sum = 0.0;

        for (o, s) in pair.pairs() {
            let dev_o = o - mean_obs;
            let dev_s = s - mean_sim;
            let err = o - s;
            ss_obs += dev_o * dev_o;
            ss_sim += dev_s * dev_s;
            cross += dev_o * dev_s;
            sse += err * err;
            residual_sum += err;
        }

        // A constant series has no dispersion; rounding in its mean must not
        // produce a tiny nonzero denominator.
        if obs_constant {
            ss_obs = 0.0;
            cross = 0.0;
        }
        if sim_constant {
            ss_sim = 0.0;
            cross = 0.0;
        }

        Self {
            n,
            sum_obs,
            mean_obs,
            mean_sim,
            ss_obs,
            ss_sim,
            cross,
            sse,
            residual_sum,
        }
    }

    /// Population standard deviation of the observed values.
    pub fn std_obs(&self) -> f64 {
        (self.ss_obs / self.n as f64).sqrt()
    }

    /// Population standard deviation of the simulated values.
    pub fn std_sim(&self) -> f64 {
        (self.ss_sim / self.n as f64).sqrt()
    }

    /// Nash-Sutcliffe Efficiency. Range: (-inf, 1], 1 = perfect.
    pub fn nse(&self) -> Statistic {
        Statistic::ratio(self.sse, self.ss_obs).map(|x| 1.0 - x)
    }

    /// Percent Bias. Optimal = 0. Positive = underestimation.
    pub fn pbias(&self) -> Statistic {
        Statistic::ratio(100.0 * self.residual_sum, self.sum_obs)
    }

    /// Root Mean Square Error. Range: [0, inf), 0 = perfect.
    pub fn rmse(&self) -> Statistic {
        Statistic::new((self.sse / self.n as f64).sqrt())
    }

    /// RMSE-observations standard deviation ratio. Range: [0, inf), 0 = perfect.
    pub fn rsr(&self) -> Statistic {
        Statistic::ratio(self.sse.sqrt(), self.ss_obs.sqrt())
    }

    /// Pearson correlation coefficient. Range: [-1, 1].
    pub fn pearson_r(&self) -> Statistic {
        // Root each sum first; their product overflows for large discharges.
        Statistic::ratio(self.cross, self.ss_obs.sqrt() * self.ss_sim.sqrt())
    }

    /// Variability ratio std(s) / std(o).
    pub fn alpha(&self) -> Statistic {
        Statistic::ratio(self.std_sim(), self.std_obs())
    }

    /// Bias ratio mean(s) / mean(o).
    pub fn beta(&self) -> Statistic {
        Statistic::ratio(self.mean_sim, self.mean_obs)
    }

    /// Kling-Gupta Efficiency. Range: (-inf, 1], 1 = perfect.
    ///
    /// Undefined when any of r, alpha or beta is undefined.
    pub fn kge(&self) -> Statistic {
        match (self.pearson_r(), self.alpha(), self.beta()) {
            (Statistic::Value(r), Statistic::Value(alpha), Statistic::Value(beta)) => {
                Statistic::new(
                    1.0 - ((r - 1.0).powi(2) + (alpha - 1.0).powi(2) + (beta - 1.0).powi(2))
                        .sqrt(),
                )
            }
            _ => Statistic::Undefined,
        }
    }

    pub fn report(&self) -> PerformanceReport {
        PerformanceReport {
            n: self.n,
            nse: self.nse(),
            kge: self.kge(),
            pbias: self.pbias(),
            rmse: self.rmse(),
            rsr: self.rsr(),
            r: self.pearson_r(),
        }
    }
}

/// Nash-Sutcliffe Efficiency of a pair.
pub fn nse(pair: &TimeSeriesPair<'_>) -> Statistic {
    Moments::accumulate(pair).nse()
}

/// Kling-Gupta Efficiency of a pair.
pub fn kge(pair: &TimeSeriesPair<'_>) -> Statistic {
    Moments::accumulate(pair).kge()
}

/// Percent Bias of a pair.
pub fn pbias(pair: &TimeSeriesPair<'_>) -> Statistic {
    Moments::accumulate(pair).pbias()
}

/// Root Mean Square Error of a pair.
pub fn rmse(pair: &TimeSeriesPair<'_>) -> Statistic {
    Moments::accumulate(pair).rmse()
}

/// RMSE-observations standard deviation ratio of a pair.
pub fn rsr(pair: &TimeSeriesPair<'_>) -> Statistic {
    Moments::accumulate(pair).rsr()
}

/// Pearson correlation coefficient of a pair.
pub fn pearson_r(pair: &TimeSeriesPair<'_>) -> Statistic {
    Moments::accumulate(pair).pearson_r()
}
