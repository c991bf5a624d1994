mod command;
mod runner;
mod util;

pub use command::Command;
pub use runner::{OutputMode, SummaryRow, run, run_with_format, summarize};
pub use util::{parse_algorithms, parse_inputs, parse_output_mode};
