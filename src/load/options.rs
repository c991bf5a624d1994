use crate::types::BenchRecord;

/// Lines the benchmark tool writes before the table header.
pub const DEFAULT_SKIP_LINES: usize = 9;

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub skip_lines: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',', skip_lines: DEFAULT_SKIP_LINES }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub csv: CsvOptions,
    pub skip_errors: bool,
    pub progress_every: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { csv: CsvOptions::default(), skip_errors: true, progress_every: Some(1000) }
    }
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<BenchRecord>,
    pub skipped: u64,
    /// `# key: value` lines found in the preamble, in file order.
    pub context: Vec<(String, String)>,
}

impl LoadReport {
    /// First preamble value for `key`.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}
