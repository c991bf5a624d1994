use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::bench::{run_plan, save_csv};
use crate::chart::{PANEL_ORDER, build_figure, save_svg};
use crate::dataset::Dataset;
use crate::errors::BenchError;
use crate::load::{LoadOptions, LoadReport, load_file};
use crate::types::{InputClass, Metric};

use super::command::Command;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
}

/// One line of `summary`: how many points an algorithm has for an input
/// class at one offset, and its metric at the largest size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub input: InputClass,
    pub algo: String,
    pub offset: u8,
    pub points: usize,
    pub largest_chars: u32,
    pub value: f64,
}

/// Summary rows grouped by offset, then input class in panel order, then
/// algorithm.
pub fn summarize(data: &Dataset, metric: Metric) -> Vec<SummaryRow> {
    let offsets: BTreeSet<u8> = data.records().iter().map(|r| r.offset).collect();
    let mut rows = Vec::new();
    for offset in offsets {
        let part = data.with_offset(offset).partition_by_input();
        for input in PANEL_ORDER {
            let group = part.get(input);
            for algo in group.algorithms() {
                let points = group.series(&algo, metric).len();
                if let Some(r) = group.largest(&algo) {
                    rows.push(SummaryRow {
                        input,
                        offset,
                        largest_chars: r.chars,
                        value: r.metric(metric),
                        points,
                        algo,
                    });
                }
            }
        }
    }
    rows
}

/// Rows as a dataset; the report keeps the skip count and preamble context.
fn load_dataset(input: &Path, load: &LoadOptions) -> Result<(Dataset, LoadReport), BenchError> {
    let mut report = load_file(input, load)?;
    if report.records.is_empty() {
        return Err(BenchError::EmptyDataset(input.display().to_string()));
    }
    let data = Dataset::from(std::mem::take(&mut report.records));
    Ok((data, report))
}

pub fn run(cmd: Command) -> Result<(), Box<dyn std::error::Error>> {
    run_with_format(cmd, OutputMode::Human)
}

pub fn run_with_format(cmd: Command, mode: OutputMode) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::Run { output, plan } => {
            let rows = run_plan(&plan)?;
            save_csv(&output, &rows)?;
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({
                        "action": "run",
                        "output": output.display().to_string(),
                        "cases": rows.len(),
                    });
                    println!("{json}");
                }
                OutputMode::Plain => println!("{} {}", rows.len(), output.display()),
                OutputMode::Human => {
                    println!("wrote {} cases to {}", rows.len(), output.display());
                }
            }
            Ok(())
        }
        Command::Plot { input, output, load, offset, metric, layout } => {
            let (data, report) = load_dataset(&input, &load)?;
            let skipped = report.skipped;
            let selected = data.with_offset(offset).len();
            if selected == 0 {
                log::warn!("plot: no rows with offset={offset} in {}", input.display());
            }
            let mut fig = build_figure(&data, offset, metric, layout);
            fig.set_y_label(&metric.axis_label_for(report.context_value("cpu_time")));
            save_svg(&fig, &output)?;
            match mode {
                OutputMode::Json => {
                    let panels: Vec<&str> = fig.panels.iter().map(|p| p.title.as_str()).collect();
                    let legend: Vec<&str> = fig.legend.iter().map(|e| e.label.as_str()).collect();
                    let json = serde_json::json!({
                        "action": "plot",
                        "output": output.display().to_string(),
                        "records": data.len(),
                        "selected": selected,
                        "skipped": skipped,
                        "panels": panels,
                        "legend": legend,
                    });
                    println!("{json}");
                }
                OutputMode::Plain => println!("{}", output.display()),
                OutputMode::Human => println!(
                    "wrote {} records={} selected={selected} skipped={skipped}",
                    output.display(),
                    data.len()
                ),
            }
            Ok(())
        }
        Command::Summary { input, load, offset, metric } => {
            let (mut data, report) = load_dataset(&input, &load)?;
            if let Some(ofs) = offset {
                data = data.with_offset(ofs);
            }
            let rows = summarize(&data, metric);
            match mode {
                OutputMode::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputMode::Plain => {
                    for r in &rows {
                        println!(
                            "{} {} {} {} {} {}",
                            r.input, r.algo, r.offset, r.points, r.largest_chars, r.value
                        );
                    }
                }
                OutputMode::Human => {
                    println!(
                        "{:<8} {:<6} {:>6} {:>6} {:>8} {:>14}",
                        "input",
                        "algo",
                        "offset",
                        "points",
                        "chars",
                        metric.axis_label_for(report.context_value("cpu_time"))
                    );
                    for r in &rows {
                        println!(
                            "{:<8} {:<6} {:>6} {:>6} {:>8} {:>14.2}",
                            r.input.as_str(),
                            r.algo,
                            r.offset,
                            r.points,
                            r.largest_chars,
                            r.value
                        );
                    }
                }
            }
            Ok(())
        }
        Command::Locate { file, algo } => {
            let hay = std::fs::read(&file)
                .map_err(|e| BenchError::Io(format!("{}: {e}", file.display())))?;
            let index = algo.find(&hay);
            log::debug!("locate: {} bytes, algo={algo}, index={index:?}", hay.len());
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({
                        "file": file.display().to_string(),
                        "algo": algo.name(),
                        "len": hay.len(),
                        "index": index,
                    });
                    println!("{json}");
                }
                OutputMode::Plain => match index {
                    Some(i) => println!("{i}"),
                    None => println!("-1"),
                },
                OutputMode::Human => match index {
                    Some(i) => println!("terminator at byte {i} ({algo})"),
                    None => println!("no terminator ({algo})"),
                },
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BenchRecord;

    fn rec(input: InputClass, algo: &str, chars: u32, cpu: f64) -> BenchRecord {
        rec_at(input, algo, 0, chars, cpu)
    }

    fn rec_at(input: InputClass, algo: &str, offset: u8, chars: u32, cpu: f64) -> BenchRecord {
        BenchRecord {
            driver: "BM_crlf".into(),
            input,
            algo: algo.into(),
            offset,
            chars,
            iterations: 10,
            real_time: cpu,
            cpu_time: cpu,
        }
    }

    #[test]
    fn summary_reports_largest_size_per_group() {
        let ds = Dataset::from(vec![
            rec(InputClass::Worst, "qd", 16, 3.0),
            rec(InputClass::Worst, "qd", 64, 9.0),
            rec(InputClass::Regular, "d1", 32, 2.0),
        ]);
        let rows = summarize(&ds, Metric::Cpu);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].input, InputClass::Regular);
        assert_eq!(rows[1].points, 2);
        assert_eq!(rows[1].largest_chars, 64);
        assert_eq!(rows[1].value, 9.0);
    }

    #[test]
    fn summary_keeps_offsets_apart() {
        let ds = Dataset::from(vec![
            rec_at(InputClass::Regular, "d1", 0, 16, 1.0),
            rec_at(InputClass::Regular, "d1", 0, 64, 10.0),
            rec_at(InputClass::Regular, "d1", 1, 16, 2.0),
            rec_at(InputClass::Regular, "d1", 1, 64, 20.0),
        ]);
        let rows = summarize(&ds, Metric::Cpu);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].offset, rows[0].points, rows[0].value), (0, 2, 10.0));
        assert_eq!((rows[1].offset, rows[1].points, rows[1].value), (1, 2, 20.0));
        assert!(rows.iter().all(|r| r.largest_chars == 64));

        let only_one = summarize(&ds.with_offset(1), Metric::Cpu);
        assert_eq!(only_one.len(), 1);
        assert_eq!(only_one[0].value, 20.0);
    }
}
