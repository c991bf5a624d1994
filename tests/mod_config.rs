use crlfbench::config::AppConfig;
use crlfbench::errors::BenchError;
use crlfbench::types::Metric;
use std::path::PathBuf;

#[test]
fn earlier_files_win_and_later_files_fill_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    std::fs::write(&first, "output = \"first.svg\"\n").unwrap();
    std::fs::write(&second, "output = \"second.svg\"\nmetric = \"real\"\noffset = 2\n").unwrap();
    let missing = dir.path().join("missing.toml");

    let cfg = AppConfig::from_files(&[first, missing, second]).unwrap();
    assert_eq!(cfg.output(), PathBuf::from("first.svg"));
    assert_eq!(cfg.metric(), Metric::Real);
    assert_eq!(cfg.offset(), 2);
    assert_eq!(cfg.input(), PathBuf::from("search.csv"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "offset = \"zero\"\n").unwrap();
    let err = AppConfig::from_files(&[bad]).unwrap_err();
    assert!(matches!(err, BenchError::Config(_)));
}

#[test]
fn environment_beats_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("crlfbench.toml");
    std::fs::write(&file, "input = \"file.csv\"\noutput = \"file.svg\"\n").unwrap();
    let mut cfg = AppConfig::from_files(&[file]).unwrap();
    cfg.apply_env(|k| (k == "CRLFBENCH_OUTPUT").then(|| "env.svg".to_string())).unwrap();
    assert_eq!(cfg.input(), PathBuf::from("file.csv"));
    assert_eq!(cfg.output(), PathBuf::from("env.svg"));
}
