//! Loader for benchmark-tool CSV output.

mod csv;
mod name;
mod options;
mod pipeline;

pub use name::{ParsedName, parse_name};
pub use options::{CsvOptions, DEFAULT_SKIP_LINES, LoadOptions, LoadReport};
pub use pipeline::{load_file, load_from_reader};
