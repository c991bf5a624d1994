use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::plan::{BenchCase, BenchPlan};
use crate::errors::BenchError;
use crate::haystack;
use crate::logger::METRICS_TARGET;
use crate::search::TERMINATOR;
use crate::types::BenchRecord;

const MAX_ITERATIONS: u64 = 1 << 30;

/// A timed case. Times in the record are nanoseconds per iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub record: BenchRecord,
    pub bytes_per_second: f64,
}

/// Check the searcher against the known terminator position of a generated
/// haystack.
///
/// # Errors
/// `BenchError::Verification` if the result differs from `len - offset - 4`.
pub fn verify_case(case: &BenchCase, hay: &[u8]) -> Result<(), BenchError> {
    let slice = hay.get(usize::from(case.offset)..).unwrap_or_default();
    let expected = slice.len().checked_sub(TERMINATOR.len());
    let found = case.algo.find(slice);
    if found != expected {
        return Err(BenchError::Verification { case: case.name(), expected, found });
    }
    Ok(())
}

/// Verify, then time one case, doubling the batch size until a batch runs
/// for at least `min_time`.
///
/// # Errors
/// `BenchError::Verification` when the searcher returns the wrong index.
pub fn run_case(case: &BenchCase, min_time: Duration) -> Result<Measurement, BenchError> {
    let hay = haystack::generate(case.input, case.size);
    verify_case(case, &hay)?;
    let slice = &hay[usize::from(case.offset).min(hay.len())..];
    let searcher = case.algo.build();

    let mut iterations: u64 = 1;
    let elapsed = loop {
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(searcher.find(black_box(slice)));
        }
        let elapsed = start.elapsed();
        if elapsed >= min_time || iterations >= MAX_ITERATIONS {
            break elapsed;
        }
        iterations *= 2;
    };

    let secs = elapsed.as_secs_f64();
    let ns_per_iter = elapsed.as_nanos() as f64 / iterations as f64;
    let bytes_per_second =
        if secs > 0.0 { slice.len() as f64 * iterations as f64 / secs } else { 0.0 };
    let record = BenchRecord {
        driver: case.algo.driver().to_string(),
        input: case.input,
        algo: case.algo.name().to_string(),
        offset: case.offset,
        chars: u32::try_from(case.size).unwrap_or(u32::MAX),
        iterations,
        real_time: ns_per_iter,
        cpu_time: ns_per_iter,
    };
    log::info!(
        target: METRICS_TARGET,
        "{} iterations={} ns={:.2} bytes_per_second={:.0}",
        case.name(),
        iterations,
        ns_per_iter,
        bytes_per_second
    );
    Ok(Measurement { record, bytes_per_second })
}

/// Run every case of the plan in order, stopping at the first failure.
///
/// # Errors
/// The first verification failure.
pub fn run_plan(plan: &BenchPlan) -> Result<Vec<Measurement>, BenchError> {
    let cases = plan.cases();
    log::info!("bench: cases={}, min_time={:?}", cases.len(), plan.min_time);
    let mut out = Vec::with_capacity(cases.len());
    for (i, case) in cases.iter().enumerate() {
        out.push(run_case(case, plan.min_time)?);
        if (i + 1) % 50 == 0 {
            log::debug!("bench: progress {}/{}", i + 1, cases.len());
        }
    }
    Ok(out)
}
