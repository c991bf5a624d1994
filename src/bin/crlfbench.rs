use clap::{Parser, Subcommand};
use crlfbench::bench::{BenchPlan, DEFAULT_MAX_SIZE, DEFAULT_MIN_TIME};
use crlfbench::chart::Layout;
use crlfbench::cli::{self as prog_cli, Command};
use crlfbench::config::AppConfig;
use crlfbench::load::{CsvOptions, LoadOptions};
use crlfbench::search::Algorithm;
use crlfbench::types::Metric;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "crlfbench", version, about = "CRLFCRLF search benchmarks and charts", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). If omitted, the default locations are searched.")]
    config: Option<PathBuf>,
    #[arg(long, default_value = "human", help = "Output format: human, plain or json")]
    format: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Measure the searchers and write a benchmark CSV")]
    Run {
        #[arg(long, short, help = "CSV file to write (default: search.csv)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Largest haystack size; sizes are powers of two from 16")]
        max_size: Option<usize>,
        #[arg(long, help = "Minimum batch time per case in milliseconds")]
        min_time_ms: Option<u64>,
        #[arg(long, default_value = "all", help = "Comma-separated algorithms or 'all'")]
        algos: String,
        #[arg(long, default_value = "all", help = "Comma-separated input classes or 'all'")]
        inputs: String,
    },
    #[command(about = "Render a benchmark CSV as three log-log panels (SVG)")]
    Plot {
        #[arg(long, short, help = "Benchmark CSV (default: search.csv)")]
        input: Option<PathBuf>,
        #[arg(long, short, help = "SVG file to write (default: search.svg)")]
        output: Option<PathBuf>,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, help = "Figure width in pixels")]
        width: Option<u32>,
        #[arg(long, help = "Figure height in pixels")]
        height: Option<u32>,
    },
    #[command(about = "Per input class and algorithm, the metric at the largest size")]
    Summary {
        #[arg(long, short, help = "Benchmark CSV (default: search.csv)")]
        input: Option<PathBuf>,
        #[command(flatten)]
        view: ViewArgs,
    },
    #[command(about = "Print the index of the first \\r\\n\\r\\n in a file")]
    Locate {
        file: PathBuf,
        #[arg(long, default_value = "qd", help = "Search algorithm")]
        algo: String,
    },
}

#[derive(clap::Args, Debug)]
struct ViewArgs {
    #[arg(long, help = "Haystack offset to select (plot default: 0; summary default: every offset)")]
    offset: Option<u8>,
    #[arg(long, help = "cpu or real (default: cpu)")]
    metric: Option<String>,
    #[arg(long, help = "Preamble lines before the CSV header (default: 9)")]
    skip_lines: Option<usize>,
}

fn load_options(cfg: &AppConfig, skip_lines: Option<usize>) -> LoadOptions {
    let mut opts = LoadOptions::default();
    if let Some(n) = skip_lines.or(cfg.skip_lines) {
        opts.csv = CsvOptions { skip_lines: n, ..opts.csv };
    }
    opts
}

fn metric(cfg: &AppConfig, cli: Option<&str>) -> Result<Metric, Box<dyn std::error::Error>> {
    Ok(match cli {
        Some(s) => s.parse()?,
        None => cfg.metric(),
    })
}

fn build_command(cmd: Commands, cfg: &AppConfig) -> Result<Command, Box<dyn std::error::Error>> {
    Ok(match cmd {
        Commands::Run { output, max_size, min_time_ms, algos, inputs } => {
            let max_size = max_size.or(cfg.max_size).unwrap_or(DEFAULT_MAX_SIZE);
            let min_time =
                min_time_ms.or(cfg.min_time_ms).map_or(DEFAULT_MIN_TIME, Duration::from_millis);
            let plan = BenchPlan::new(max_size, min_time)
                .with_algorithms(prog_cli::parse_algorithms(&algos)?)
                .with_inputs(prog_cli::parse_inputs(&inputs)?);
            Command::Run { output: output.unwrap_or_else(|| cfg.input()), plan }
        }
        Commands::Plot { input, output, view, width, height } => {
            let mut layout = Layout::default();
            layout.width = width.or(cfg.width).unwrap_or(layout.width);
            layout.height = height.or(cfg.height).unwrap_or(layout.height);
            Command::Plot {
                input: input.unwrap_or_else(|| cfg.input()),
                output: output.unwrap_or_else(|| cfg.output()),
                load: load_options(cfg, view.skip_lines),
                offset: view.offset.unwrap_or_else(|| cfg.offset()),
                metric: metric(cfg, view.metric.as_deref())?,
                layout,
            }
        }
        Commands::Summary { input, view } => Command::Summary {
            input: input.unwrap_or_else(|| cfg.input()),
            load: load_options(cfg, view.skip_lines),
            offset: view.offset.or(cfg.offset),
            metric: metric(cfg, view.metric.as_deref())?,
        },
        Commands::Locate { file, algo } => Command::Locate { file, algo: algo.parse::<Algorithm>()? },
    })
}

fn main() {
    let cli = Cli::parse();
    let cfg = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = crlfbench::logger::configure_from_env_or(cfg.log_dir.as_deref(), cfg.log_level.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }
    let mode = prog_cli::parse_output_mode(Some(cli.format.as_str()));
    let res = build_command(cli.command, &cfg).and_then(|cmd| prog_cli::run_with_format(cmd, mode));
    if let Err(e) = res {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
