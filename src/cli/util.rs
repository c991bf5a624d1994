use crate::errors::BenchError;
use crate::search::Algorithm;
use crate::types::InputClass;

use super::runner::OutputMode;

pub fn parse_output_mode(s: Option<&str>) -> OutputMode {
    match s.map(str::to_lowercase).as_deref() {
        Some("json") => OutputMode::Json,
        Some("plain") => OutputMode::Plain,
        _ => OutputMode::Human,
    }
}

fn parse_list<T, F>(s: &str, all: &[T], one: F) -> Result<Vec<T>, BenchError>
where
    T: Copy + PartialEq,
    F: Fn(&str) -> Result<T, BenchError>,
{
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(all.to_vec());
    }
    let mut out: Vec<T> = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let v = one(part)?;
        if !out.contains(&v) {
            out.push(v);
        }
    }
    Ok(out)
}

/// `all` or a comma-separated list of algorithm names.
pub fn parse_algorithms(s: &str) -> Result<Vec<Algorithm>, BenchError> {
    parse_list(s, &Algorithm::ALL, str::parse)
}

/// `all` or a comma-separated list of input classes.
pub fn parse_inputs(s: &str) -> Result<Vec<InputClass>, BenchError> {
    parse_list(s, &InputClass::ALL, str::parse)
}
