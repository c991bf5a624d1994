//! Measurement runner: generate haystacks, verify each searcher, time it and
//! write the results in the benchmark-tool CSV layout the loader reads.

mod plan;
mod runner;
mod writer;

pub use plan::{BenchCase, BenchPlan, DEFAULT_MAX_SIZE, DEFAULT_MIN_TIME, sizes_up_to};
pub use runner::{Measurement, run_case, run_plan, verify_case};
pub use writer::{HEADER, save_csv, write_csv};
