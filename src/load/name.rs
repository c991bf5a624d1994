use crate::errors::BenchError;
use crate::types::InputClass;

/// Fields encoded in a benchmark name such as `BM_crlf/regular/d1/ofs=0/16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub driver: String,
    pub input: InputClass,
    pub algo: String,
    pub offset: u8,
    pub chars: u32,
}

/// Parse `driver/input/algo[/ofs=N]/chars`.
///
/// Segments may also be separated by commas (names of files that were split
/// in place), and the offset may appear without its `ofs=` prefix. A missing
/// offset segment means offset 0.
///
/// # Errors
/// `InvalidName` for a wrong segment count or non-numeric offset/size,
/// `UnknownInput` for an input class other than regular/worst/best.
pub fn parse_name(name: &str) -> Result<ParsedName, BenchError> {
    let segments: Vec<&str> =
        name.trim().trim_matches('"').split(['/', ',']).map(str::trim).collect();
    let (driver, input, algo, offset, chars) = match segments.as_slice() {
        [driver, input, algo, chars] => (*driver, *input, *algo, None, *chars),
        [driver, input, algo, offset, chars] => (*driver, *input, *algo, Some(*offset), *chars),
        _ => return Err(BenchError::InvalidName(name.to_string())),
    };
    if driver.is_empty() || algo.is_empty() {
        return Err(BenchError::InvalidName(name.to_string()));
    }
    let offset = match offset {
        Some(s) => s
            .strip_prefix("ofs=")
            .unwrap_or(s)
            .parse::<u8>()
            .map_err(|_| BenchError::InvalidName(name.to_string()))?,
        None => 0,
    };
    let chars = chars.parse::<u32>().map_err(|_| BenchError::InvalidName(name.to_string()))?;
    Ok(ParsedName {
        driver: driver.to_string(),
        input: input.parse()?,
        algo: algo.to_string(),
        offset,
        chars,
    })
}
