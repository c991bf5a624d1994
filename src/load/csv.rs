use std::io::{BufRead, Read};

use crate::errors::BenchError;
use crate::types::{BenchRecord, TimeUnit};

use super::name::parse_name;
use super::options::{LoadOptions, LoadReport};

/// Header positions of the columns the loader reads.
#[derive(Debug)]
struct Columns {
    width: usize,
    iterations: usize,
    real_time: usize,
    cpu_time: usize,
    time_unit: Option<usize>,
    error_occurred: Option<usize>,
}

impl Columns {
    fn from_header(header: &csv::StringRecord) -> Result<Self, BenchError> {
        let find = |key: &str| header.iter().position(|h| h == key);
        let require =
            |key: &str| find(key).ok_or_else(|| BenchError::MissingColumn(key.to_string()));
        if header.get(0) != Some("name") {
            return Err(BenchError::MissingColumn("name".to_string()));
        }
        Ok(Self {
            width: header.len(),
            iterations: require("iterations")?,
            real_time: require("real_time")?,
            cpu_time: require("cpu_time")?,
            time_unit: find("time_unit"),
            error_occurred: find("error_occurred"),
        })
    }
}

/// `# key: value` as a pair; other preamble lines carry no context.
fn context_line(line: &[u8]) -> Option<(String, String)> {
    let text = String::from_utf8_lossy(line);
    let (key, value) = text.trim_end().strip_prefix('#')?.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

/// Consume `n` raw lines, collecting context pairs. Returns false if the
/// input ends first.
pub(super) fn read_preamble<R: BufRead>(
    reader: &mut R,
    n: usize,
    context: &mut Vec<(String, String)>,
) -> Result<bool, BenchError> {
    let mut line = Vec::new();
    for _ in 0..n {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(false);
        }
        context.extend(context_line(&line));
    }
    Ok(true)
}

/// Turn one table row into a record. `Ok(None)` for rows the benchmark tool
/// flagged as failed.
fn parse_row(rec: &csv::StringRecord, cols: &Columns) -> Result<Option<BenchRecord>, BenchError> {
    // a name split over several fields shifts every later column right
    let shift = rec.len().saturating_sub(cols.width);
    let field = |idx: usize| rec.get(idx + shift).unwrap_or("");
    if let Some(idx) = cols.error_occurred
        && field(idx) == "true"
    {
        return Ok(None);
    }
    let name = rec.iter().take(shift + 1).collect::<Vec<_>>().join("/");
    let parsed = parse_name(&name)?;
    let bad = |col: &str, v: &str| BenchError::Parse { row: 0, message: format!("{col}={v:?}") };
    let iterations = field(cols.iterations);
    let iterations = iterations.parse::<u64>().map_err(|_| bad("iterations", iterations))?;
    let real = field(cols.real_time);
    let real = real.parse::<f64>().map_err(|_| bad("real_time", real))?;
    let cpu = field(cols.cpu_time);
    let cpu = cpu.parse::<f64>().map_err(|_| bad("cpu_time", cpu))?;
    let unit = match cols.time_unit {
        Some(idx) => field(idx).parse::<TimeUnit>()?,
        None => TimeUnit::Ns,
    };
    Ok(Some(BenchRecord {
        driver: parsed.driver,
        input: parsed.input,
        algo: parsed.algo,
        offset: parsed.offset,
        chars: parsed.chars,
        iterations,
        real_time: unit.to_nanos(real),
        cpu_time: unit.to_nanos(cpu),
    }))
}

fn row_error(row: usize, e: BenchError) -> BenchError {
    match e {
        BenchError::Parse { message, .. } => BenchError::Parse { row, message },
        other => BenchError::Parse { row, message: other.to_string() },
    }
}

pub fn read_table<R: Read>(
    reader: R,
    opts: &LoadOptions,
    report: &mut LoadReport,
) -> Result<(), BenchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(opts.csv.delimiter)
        .from_reader(reader);
    let header = rdr.headers()?.clone();
    if header.is_empty() {
        return Err(BenchError::MissingHeader(opts.csv.skip_lines));
    }
    let cols = Columns::from_header(&header)?;
    log::debug!("load: columns={cols:?}");
    let mut row_no: usize = 0;
    for rec in rdr.records() {
        row_no += 1;
        let outcome = rec.map_err(BenchError::from).and_then(|r| parse_row(&r, &cols));
        match outcome {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {
                log::warn!("row {row_no}: benchmark reported an error; skipped");
                report.skipped += 1;
            }
            Err(e) => {
                let e = row_error(row_no, e);
                if !opts.skip_errors {
                    return Err(e);
                }
                log::warn!("{e}; skipped");
                report.skipped += 1;
            }
        }
        if let Some(n) = opts.progress_every
            && n > 0
            && row_no % n == 0
        {
            log::info!("loaded {} records", report.records.len());
        }
    }
    Ok(())
}
