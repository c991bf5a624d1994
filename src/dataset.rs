use std::collections::BTreeSet;

use crate::types::{BenchRecord, InputClass, Metric};

/// An in-memory table of benchmark rows. Filters return new datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<BenchRecord>,
}

/// Rows split by input class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub regular: Dataset,
    pub worst: Dataset,
    pub best: Dataset,
}

impl Partition {
    pub fn get(&self, input: InputClass) -> &Dataset {
        match input {
            InputClass::Regular => &self.regular,
            InputClass::Worst => &self.worst,
            InputClass::Best => &self.best,
        }
    }

    pub fn total(&self) -> usize {
        self.regular.len() + self.worst.len() + self.best.len()
    }
}

impl From<Vec<BenchRecord>> for Dataset {
    fn from(records: Vec<BenchRecord>) -> Self {
        Self { records }
    }
}

impl Dataset {
    pub fn records(&self) -> &[BenchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn filter(&self, pred: impl Fn(&BenchRecord) -> bool) -> Dataset {
        Dataset { records: self.records.iter().filter(|r| pred(r)).cloned().collect() }
    }

    pub fn with_offset(&self, offset: u8) -> Dataset {
        self.filter(|r| r.offset == offset)
    }

    pub fn by_input(&self, input: InputClass) -> Dataset {
        self.filter(|r| r.input == input)
    }

    pub fn partition_by_input(&self) -> Partition {
        let mut part = Partition::default();
        for r in &self.records {
            let bucket = match r.input {
                InputClass::Regular => &mut part.regular,
                InputClass::Worst => &mut part.worst,
                InputClass::Best => &mut part.best,
            };
            bucket.records.push(r.clone());
        }
        part
    }

    /// Distinct algorithm labels, sorted.
    pub fn algorithms(&self) -> Vec<String> {
        self.records.iter().map(|r| r.algo.clone()).collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// `(chars, metric)` points of one algorithm, ordered by `chars`.
    pub fn series(&self, algo: &str, metric: Metric) -> Vec<(u32, f64)> {
        let mut points: Vec<(u32, f64)> = self
            .records
            .iter()
            .filter(|r| r.algo == algo)
            .map(|r| (r.chars, r.metric(metric)))
            .collect();
        points.sort_by_key(|p| p.0);
        points
    }

    /// Record at the largest `chars` for an algorithm.
    pub fn largest(&self, algo: &str) -> Option<&BenchRecord> {
        self.records.iter().filter(|r| r.algo == algo).max_by_key(|r| r.chars)
    }
}
