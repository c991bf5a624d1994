use std::time::Duration;

use crate::search::Algorithm;
use crate::types::InputClass;

pub const MIN_SIZE: usize = 16;
pub const DEFAULT_MAX_SIZE: usize = 65536;
pub const DEFAULT_MIN_TIME: Duration = Duration::from_millis(20);

/// One measurement: a searcher over one haystack at one offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchCase {
    pub algo: Algorithm,
    pub input: InputClass,
    pub offset: u8,
    pub size: usize,
}

impl BenchCase {
    pub fn name(&self) -> String {
        format!(
            "{}/{}/{}/ofs={}/{}",
            self.algo.driver(),
            self.input,
            self.algo.name(),
            self.offset,
            self.size
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchPlan {
    pub sizes: Vec<usize>,
    pub inputs: Vec<InputClass>,
    pub algorithms: Vec<Algorithm>,
    pub min_time: Duration,
}

impl Default for BenchPlan {
    fn default() -> Self {
        Self {
            sizes: sizes_up_to(DEFAULT_MAX_SIZE),
            inputs: InputClass::ALL.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
            min_time: DEFAULT_MIN_TIME,
        }
    }
}

/// Powers of two from 16 through `max` inclusive (empty if `max < 16`).
pub fn sizes_up_to(max: usize) -> Vec<usize> {
    std::iter::successors(Some(MIN_SIZE), |s| s.checked_mul(2)).take_while(|s| *s <= max).collect()
}

impl BenchPlan {
    pub fn new(max_size: usize, min_time: Duration) -> Self {
        Self { sizes: sizes_up_to(max_size), min_time, ..Self::default() }
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<InputClass>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Cases in output order: algorithm, input class, offset, size.
    pub fn cases(&self) -> Vec<BenchCase> {
        let mut out = Vec::new();
        for &algo in &self.algorithms {
            for &input in &self.inputs {
                for &offset in algo.offsets() {
                    for &size in &self.sizes {
                        out.push(BenchCase { algo, input, offset, size });
                    }
                }
            }
        }
        out
    }
}
