use std::io::{self, Write};
use std::path::Path;

use super::runner::Measurement;
use crate::errors::BenchError;
use crate::fsutil::write_atomic;
use crate::load::DEFAULT_SKIP_LINES;
use crate::types::CPU_TIME_IS_WALL;

pub const HEADER: [&str; 10] = [
    "name",
    "iterations",
    "real_time",
    "cpu_time",
    "time_unit",
    "bytes_per_second",
    "items_per_second",
    "label",
    "error_occurred",
    "error_message",
];

/// Context lines written above the table; their count matches the loader's
/// default `skip_lines`.
fn preamble(count: usize) -> [String; DEFAULT_SKIP_LINES] {
    let cpus = std::thread::available_parallelism().map_or(1, |n| n.get());
    [
        format!("# date: {}", chrono::Local::now().to_rfc3339()),
        format!("# executable: {}", env!("CARGO_PKG_NAME")),
        format!("# version: {}", env!("CARGO_PKG_VERSION")),
        format!("# os: {}", std::env::consts::OS),
        format!("# arch: {}", std::env::consts::ARCH),
        format!("# cpus: {cpus}"),
        "# time_unit: ns".to_string(),
        format!("# cpu_time: {CPU_TIME_IS_WALL}"),
        format!("# cases: {count}"),
    ]
}

/// Write measurements as a benchmark-tool CSV table.
///
/// # Errors
/// I/O and CSV serialization errors.
pub fn write_csv<W: Write>(out: W, rows: &[Measurement]) -> Result<(), BenchError> {
    let mut out = io::BufWriter::new(out);
    for line in preamble(rows.len()) {
        writeln!(out, "{line}")?;
    }
    let mut w = csv::WriterBuilder::new().from_writer(out);
    w.write_record(HEADER)?;
    for m in rows {
        let r = &m.record;
        w.write_record([
            r.name(),
            r.iterations.to_string(),
            format!("{:.3}", r.real_time),
            format!("{:.3}", r.cpu_time),
            "ns".to_string(),
            format!("{:.0}", m.bytes_per_second),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Atomically write the CSV table to `path`.
///
/// # Errors
/// `BenchError::Io` if the file cannot be written.
pub fn save_csv(path: &Path, rows: &[Measurement]) -> Result<(), BenchError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    write_atomic(path, |w| w.write_all(&buf))
        .map_err(|e| BenchError::Io(format!("{}: {e}", path.display())))?;
    log::info!("bench: wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BenchRecord, InputClass};

    fn measurement() -> Measurement {
        Measurement {
            record: BenchRecord {
                driver: "BM_crlf".into(),
                input: InputClass::Regular,
                algo: "d2".into(),
                offset: 1,
                chars: 256,
                iterations: 4096,
                real_time: 31.25,
                cpu_time: 31.25,
            },
            bytes_per_second: 8.192e9,
        }
    }

    #[test]
    fn layout_is_preamble_header_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[measurement()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DEFAULT_SKIP_LINES + 2);
        assert!(lines[..DEFAULT_SKIP_LINES].iter().all(|l| l.starts_with("# ")));
        assert_eq!(lines[DEFAULT_SKIP_LINES], HEADER.join(","));
        assert_eq!(lines[DEFAULT_SKIP_LINES + 1], "BM_crlf/regular/d2/ofs=1/256,4096,31.250,31.250,ns,8192000000,,,,");
    }
}
