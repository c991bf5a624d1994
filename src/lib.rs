pub mod bench;
pub mod chart;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod fsutil;
pub mod haystack;
pub mod load;
pub mod logger;
pub mod search;
pub mod types;

pub use dataset::Dataset;
pub use errors::BenchError;
pub use search::{Algorithm, Search, TERMINATOR};
pub use types::{BenchRecord, InputClass, Metric};
