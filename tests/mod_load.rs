use crlfbench::errors::BenchError;
use crlfbench::load::{CsvOptions, LoadOptions, load_file, load_from_reader};
use crlfbench::types::InputClass;
use std::io::Cursor;

const HEADER: &str = "name,iterations,real_time,cpu_time,time_unit,bytes_per_second,items_per_second,label,error_occurred,error_message";

fn context_block() -> String {
    [
        "2024-01-01T00:00:00+00:00",
        "Running ./bm_search",
        "Run on (8 X 2400 MHz CPU s)",
        "CPU Caches:",
        "  L1 Data 32 KiB (x4)",
        "  L1 Instruction 32 KiB (x4)",
        "  L2 Unified 256 KiB (x4)",
        "  L3 Unified 8192 KiB (x1)",
        "Load Average: 0.10, 0.20, 0.30",
    ]
    .iter()
    .map(|l| format!("{l}\n"))
    .collect()
}

#[test]
fn load_file_reads_raw_benchmark_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.csv");
    let mut text = context_block();
    text.push_str(HEADER);
    text.push('\n');
    text.push_str("\"BM_crlf/regular/d1/ofs=0/16\",1000,10.5,10.25,ns,1.5e9,,,,\n");
    text.push_str("\"BM_crlf/regular/d1/ofs=1/16\",1000,11,11,ns,1.5e9,,,,\n");
    text.push_str("\"BM_crlf/best/qd/ofs=3/1024\",200,1.5,1.25,us,1e9,,,,\n");
    std::fs::write(&path, text).unwrap();

    let report = load_file(&path, &LoadOptions::default()).unwrap();
    assert_eq!(report.skipped, 0);
    assert_eq!(report.records.len(), 3);
    let qd = &report.records[2];
    assert_eq!(qd.input, InputClass::Best);
    assert_eq!(qd.offset, 3);
    assert_eq!(qd.chars, 1024);
    // microseconds are normalized to nanoseconds
    assert_eq!(qd.real_time, 1500.0);
    assert_eq!(qd.cpu_time, 1250.0);
}

#[test]
fn load_accepts_sed_preprocessed_names() {
    // `sed 's/\//,/g; s/ofs=//g'` turns the quoted name into five fields
    let mut text = context_block();
    text.push_str(HEADER);
    text.push('\n');
    text.push_str("\"BM_crlf,worst,d3,1,4096\",50,900,880,ns,4.5e9,,,,\n");
    text.push_str("\"BM_fjs,best,fjs,64\",900,20,19,ns,3e9,,,,\n");
    let report = load_from_reader(Cursor::new(text), &LoadOptions::default()).unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].algo, "d3");
    assert_eq!(report.records[0].offset, 1);
    assert_eq!(report.records[0].cpu_time, 880.0);
    assert_eq!(report.records[1].driver, "BM_fjs");
    assert_eq!(report.records[1].offset, 0);
}

#[test]
fn load_without_preamble_when_skip_lines_is_zero() {
    let text = format!("{HEADER}\nBM_naive/best/naive/ofs=0/16,10,1,1,ns,,,,,\n");
    let opts = LoadOptions { csv: CsvOptions { skip_lines: 0, ..Default::default() }, ..Default::default() };
    let report = load_from_reader(Cursor::new(text), &opts).unwrap();
    assert_eq!(report.records.len(), 1);
}

#[test]
fn table_without_time_unit_column_is_nanoseconds() {
    let mut text = context_block();
    text.push_str("name,iterations,real_time,cpu_time\n");
    text.push_str("BM_crlf/regular/d1/ofs=0/16,10,1.5,2.5\n");
    let opts = LoadOptions { skip_errors: false, ..Default::default() };
    let report = load_from_reader(Cursor::new(text), &opts).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].real_time, 1.5);
    assert_eq!(report.records[0].cpu_time, 2.5);
}

#[test]
fn preamble_context_is_reported() {
    let mut text = String::from("# date: 2024-01-01\n# cpu_time: wall clock per iteration\n");
    text.push_str(&context_block().lines().skip(2).map(|l| format!("{l}\n")).collect::<String>());
    text.push_str(HEADER);
    text.push('\n');
    let report = load_from_reader(Cursor::new(text), &LoadOptions::default()).unwrap();
    assert_eq!(report.context_value("cpu_time"), Some("wall clock per iteration"));
    assert_eq!(report.context_value("date"), Some("2024-01-01"));
    assert_eq!(report.context.len(), 2);

    // the benchmark tool's own context lines are not `# key: value`
    let mut text = context_block();
    text.push_str(HEADER);
    text.push('\n');
    let report = load_from_reader(Cursor::new(text), &LoadOptions::default()).unwrap();
    assert!(report.context.is_empty());
}

#[test]
fn missing_required_column_is_an_error() {
    let mut text = context_block();
    text.push_str("name,iterations,real_time\n");
    text.push_str("BM_crlf/regular/d1/ofs=0/16,10,1\n");
    let err = load_from_reader(Cursor::new(text), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, BenchError::MissingColumn(ref c) if c == "cpu_time"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.csv"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, BenchError::Io(ref m) if m.contains("absent.csv")));
}

#[test]
fn strict_mode_reports_bad_name() {
    let mut text = context_block();
    text.push_str(HEADER);
    text.push('\n');
    text.push_str("\"BM_crlf/sideways/d1/ofs=0/16\",10,1,1,ns,,,,,\n");
    let lenient = load_from_reader(Cursor::new(text.clone()), &LoadOptions::default()).unwrap();
    assert_eq!(lenient.skipped, 1);
    let strict = LoadOptions { skip_errors: false, ..Default::default() };
    assert!(load_from_reader(Cursor::new(text), &strict).is_err());
}
