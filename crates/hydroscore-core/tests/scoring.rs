use approx::assert_relative_eq;
use hydroscore_core::{
    evaluate, score_run, score_series, CalibrationError, EvalError, PerformanceReport, Simulator,
    Statistic, WarmupPolicy,
};

/// Exponential recession towards a baseflow, seeded by a rainfall series.
struct Recession;

impl Simulator for Recession {
    type Forcing = [f64];
    type Params = (f64, f64);

    fn simulate(&self, rain: &[f64], &(k, base): &(f64, f64)) -> Vec<f64> {
        let mut q = base;
        rain.iter()
            .map(|p| {
                q = base + (q - base) * (1.0 - k) + k * p;
                q
            })
            .collect()
    }
}

fn seasonal_rain(n: usize) -> Vec<f64> {
    (0..n)
        .map(|t| {
            let phase = t as f64 / 365.0 * std::f64::consts::TAU;
            (5.0 + 4.0 * phase.sin() + 3.0 * (t as f64 * 0.37).cos()).max(0.0)
        })
        .collect()
}

#[test]
fn calibration_recovers_true_parameters() {
    let rain = seasonal_rain(1_095);
    let truth = (0.3, 1.0);
    let observed = Recession.simulate(&rain, &truth);
    let policy = WarmupPolicy::default();

    let score = |params: (f64, f64)| -> PerformanceReport {
        score_run(&Recession, &rain[..], &params, &observed, &policy).unwrap()
    };

    let best = score(truth);
    assert_eq!(best.n, 1_095 - 365);
    assert_relative_eq!(best.nse.value().unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(best.kge.value().unwrap(), 1.0, epsilon = 1e-12);

    let worse = score((0.05, 1.0));
    assert!(worse.nse.value().unwrap() < best.nse.value().unwrap());
    assert!(worse.rmse.value().unwrap() > 0.0);
}

#[test]
fn gauge_gap_only_removes_matching_steps() {
    let rain = seasonal_rain(800);
    let simulated = Recession.simulate(&rain, &(0.2, 0.5));
    let mut observed = simulated.clone();
    for q in &mut observed[500..520] {
        *q = f64::NAN;
    }

    let report = score_series(&observed, &simulated, &WarmupPolicy::default()).unwrap();
    assert_eq!(report.n, 800 - 365 - 20);
    assert_relative_eq!(report.rmse.value().unwrap(), 0.0);
    assert_relative_eq!(report.r.value().unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn failures_are_distinct_from_undefined_statistics() {
    assert_eq!(
        evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(EvalError::DimensionMismatch {
            observed: 3,
            simulated: 2
        })
    );
    assert_eq!(evaluate(&[f64::NAN, f64::NAN], &[1.0, 2.0]), Err(EvalError::NoValidData));

    let report = evaluate(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(report.nse, Statistic::Undefined);
    assert_eq!(report.rsr, Statistic::Undefined);
    assert!(report.rmse.is_defined());
    assert!(report.pbias.is_defined());
}

#[test]
fn short_run_is_scored_in_full() {
    let rain = seasonal_rain(400);
    let observed = Recession.simulate(&rain, &(0.3, 1.0));
    let report = score_run(
        &Recession,
        &rain[..],
        &(0.3, 1.0),
        &observed,
        &WarmupPolicy::default(),
    )
    .unwrap();
    assert_eq!(report.n, 400);
}

#[test]
fn calibration_error_wraps_eval_error() {
    let err = score_series(&[f64::NAN; 3], &[1.0; 3], &WarmupPolicy::none()).unwrap_err();
    assert!(matches!(err, CalibrationError::Eval(EvalError::NoValidData)));
}

#[test]
fn report_renders_undefined_as_placeholder() {
    let report = evaluate(&[-1.0, 1.0], &[-1.0, 1.5]).unwrap();
    let text = report.to_string();
    assert!(text.starts_with("Model Performance\n"));
    assert!(text.contains("PBIAS =      n/a"));
    assert!(text.contains("n     =        2"));
}
