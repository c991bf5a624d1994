use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::BenchError;

use super::csv::{read_preamble, read_table};
use super::options::{LoadOptions, LoadReport};

/// Load benchmark rows from a CSV file.
///
/// # Errors
/// I/O errors opening or reading the file, a missing header or required
/// column, and, when `skip_errors` is off, the first malformed row.
pub fn load_file<P: AsRef<Path>>(path: P, opts: &LoadOptions) -> Result<LoadReport, BenchError> {
    log::info!("load: path={}, skip_lines={}", path.as_ref().display(), opts.csv.skip_lines);
    let file = File::open(&path)
        .map_err(|e| BenchError::Io(format!("{}: {e}", path.as_ref().display())))?;
    let report = load_from_reader(file, opts)?;
    log::info!("load: records={}, skipped={}", report.records.len(), report.skipped);
    Ok(report)
}

/// Load benchmark rows from any reader.
///
/// # Errors
/// Same as [`load_file`], minus opening the file.
pub fn load_from_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<LoadReport, BenchError> {
    let mut reader = BufReader::new(reader);
    let mut report = LoadReport::default();
    if !read_preamble(&mut reader, opts.csv.skip_lines, &mut report.context)? {
        return Err(BenchError::MissingHeader(opts.csv.skip_lines));
    }
    read_table(reader, opts, &mut report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputClass;
    use std::io::Cursor;

    const PREAMBLE: &str = "l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8\nl9\n";
    const HEADER: &str = "name,iterations,real_time,cpu_time,time_unit,bytes_per_second,items_per_second,label,error_occurred,error_message\n";

    fn table(rows: &[&str]) -> String {
        let mut s = String::from(PREAMBLE);
        s.push_str(HEADER);
        for r in rows {
            s.push_str(r);
            s.push('\n');
        }
        s
    }

    #[test]
    fn loads_raw_benchmark_rows() {
        let data = table(&[
            "\"BM_crlf/regular/d1/ofs=0/16\",1000,12.5,12.4,ns,1.2e9,,,,",
            "\"BM_crlf/worst/qd/ofs=2/32\",500,20,19.5,ns,1.6e9,,,,",
            "\"BM_fjs/best/fjs/64\",800,5,5,ns,1e10,,,,",
        ]);
        let report = load_from_reader(Cursor::new(data), &LoadOptions::default()).unwrap();
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.records[1].input, InputClass::Worst);
        assert_eq!(report.records[1].offset, 2);
        assert_eq!(report.records[2].offset, 0);
        assert_eq!(report.records[0].cpu_time, 12.4);
    }

    #[test]
    fn loads_preprocessed_rows() {
        // names split into separate fields and `ofs=` stripped
        let data = table(&["BM_crlf,regular,d1,0,16,1000,12.5,12.4,ns,1.2e9,,,,"]);
        let report = load_from_reader(Cursor::new(data), &LoadOptions::default()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].chars, 16);
        assert_eq!(report.records[0].iterations, 1000);
    }

    #[test]
    fn skips_bad_rows_when_enabled() {
        let data = table(&[
            "\"BM_crlf/regular/d1/ofs=0/16\",1000,12.5,12.4,ns,,,,,",
            "\"BM_crlf/regular/d1/ofs=0/32\",abc,12.5,12.4,ns,,,,,",
            "\"BM_crlf/regular/d1/ofs=0/64\",,,,ns,,,,true,boom",
        ]);
        let report = load_from_reader(Cursor::new(data.clone()), &LoadOptions::default()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped, 2);

        let opts = LoadOptions { skip_errors: false, ..Default::default() };
        let err = load_from_reader(Cursor::new(data), &opts).unwrap_err();
        assert!(matches!(err, BenchError::Parse { row: 2, .. }));
    }

    #[test]
    fn short_input_has_no_header() {
        let err = load_from_reader(Cursor::new("a\nb\n"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, BenchError::MissingHeader(9)));
    }
}
