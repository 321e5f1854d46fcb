/// Pure Rust benchmark for the performance evaluator.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use hydroscore_core::evaluate;
use tracing::info;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic data generation.
///
/// Every 50th observation is missing so the pairwise filter is exercised.
fn make_data(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let observed: Vec<f64> = (0..n)
        .map(|i| if i % 50 == 0 { f64::NAN } else { next_f64() * 30.0 })
        .collect();
    let simulated: Vec<f64> = (0..n).map(|_| next_f64() * 30.0).collect();
    (observed, simulated)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_evaluate(sizes: &[usize]) -> Vec<(usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let (observed, simulated) = make_data(n, 42);

        // Warmup
        let _ = black_box(evaluate(&observed, &simulated));

        let dur = median_time(|| {
            let _ = black_box(evaluate(black_box(&observed), black_box(&simulated)));
        });
        results.push((n, dur));
    }
    results
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let sizes = [365, 3_650, 36_500, 365_000];
    info!(repeats = REPEATS, "benchmarking evaluate");

    println!("{:>10} | {:>12} | {:>10}", "n", "median", "ns/step");
    println!("-----------|--------------|-----------");
    for (n, dur) in bench_evaluate(&sizes) {
        println!(
            "{:>10} | {:>12.3?} | {:>10.2}",
            n,
            dur,
            dur.as_nanos() as f64 / n as f64
        );
    }
}
