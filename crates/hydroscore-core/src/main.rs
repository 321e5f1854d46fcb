use hydroscore_core::{score_run, Simulator, WarmupPolicy};
use tracing::{error, info};

/// Single linear reservoir: Q = k * S, driven by effective rainfall.
struct LinearReservoir;

impl Simulator for LinearReservoir {
    type Forcing = [f64];
    type Params = f64;

    fn simulate(&self, rain: &[f64], k: &f64) -> Vec<f64> {
        let mut storage = 0.0;
        rain.iter()
            .map(|&p| {
                storage += p;
                let q = k * storage;
                storage -= q;
                q
            })
            .collect()
    }
}

/// Deterministic LCG so the demo output is stable.
fn make_rain(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };
    (0..n)
        .map(|_| {
            let u = next_f64();
            if u < 0.6 {
                0.0
            } else {
                (u - 0.6) * 40.0
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Three years of daily rainfall [mm/d]
    let rain = make_rain(3 * 365, 42);

    // "Observed" discharge from k = 0.25, with a gauge outage in year three
    let mut observed = LinearReservoir.simulate(&rain, &0.25);
    for q in &mut observed[800..830] {
        *q = f64::NAN;
    }

    let policy = WarmupPolicy::default();
    info!(
        steps = rain.len(),
        warmup = policy.warmup_steps(),
        "scoring candidate recession coefficients"
    );

    for k in [0.1, 0.25, 0.5] {
        match score_run(&LinearReservoir, &rain[..], &k, &observed, &policy) {
            Ok(report) => println!("\nk = {k:.2}\n{report}"),
            Err(e) => error!("k = {k:.2}: {e}"),
        }
    }
}
