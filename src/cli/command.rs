use std::path::PathBuf;

use crate::bench::BenchPlan;
use crate::chart::Layout;
use crate::load::LoadOptions;
use crate::search::Algorithm;
use crate::types::Metric;

pub enum Command {
    /// Measure every case of the plan and write the CSV table.
    Run { output: PathBuf, plan: BenchPlan },
    Plot {
        input: PathBuf,
        output: PathBuf,
        load: LoadOptions,
        offset: u8,
        metric: Metric,
        layout: Layout,
    },
    Summary {
        input: PathBuf,
        load: LoadOptions,
        offset: Option<u8>,
        metric: Metric,
    },
    /// Print the first terminator index in a file.
    Locate { file: PathBuf, algo: Algorithm },
}
