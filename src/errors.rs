use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("Header row not found after {0} preamble lines")]
    MissingHeader(usize),

    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Invalid benchmark name: {0}")]
    InvalidName(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown input class: {0}")]
    UnknownInput(String),

    #[error("Verification failed for {case}: expected {expected:?}, found {found:?}")]
    Verification { case: String, expected: Option<usize>, found: Option<usize> },

    #[error("Logger error: {0}")]
    Log(String),

    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),
}

impl From<std::io::Error> for BenchError {
    fn from(e: std::io::Error) -> Self {
        BenchError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
