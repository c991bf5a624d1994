use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::BenchError;
use crate::types::Metric;

pub const DEFAULT_INPUT: &str = "search.csv";
pub const DEFAULT_OUTPUT: &str = "search.svg";
pub const CONFIG_FILE: &str = "crlfbench.toml";

/// Settings gathered from config files and the environment. Every key is
/// optional; the accessors apply defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip_lines: Option<usize>,
    pub offset: Option<u8>,
    pub metric: Option<Metric>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_size: Option<usize>,
    pub min_time_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Config files in lookup order: `--config`, `$CRLFBENCH_CONFIG`,
/// `~/.config/crlfbench.toml`, `./crlfbench.toml`.
pub fn config_paths(cli_cfg: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = cli_cfg {
        paths.push(p.to_path_buf());
    }
    if let Ok(p) = std::env::var("CRLFBENCH_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Some(home) = dirs_next::home_dir() {
        paths.push(home.join(".config").join(CONFIG_FILE));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join(CONFIG_FILE));
    }
    paths
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, BenchError> {
        Ok(toml::from_str(s)?)
    }

    /// Fill keys still unset from `other`.
    pub fn fill_from(&mut self, other: AppConfig) {
        if self.input.is_none() {
            self.input = other.input;
        }
        if self.output.is_none() {
            self.output = other.output;
        }
        if self.skip_lines.is_none() {
            self.skip_lines = other.skip_lines;
        }
        if self.offset.is_none() {
            self.offset = other.offset;
        }
        if self.metric.is_none() {
            self.metric = other.metric;
        }
        if self.width.is_none() {
            self.width = other.width;
        }
        if self.height.is_none() {
            self.height = other.height;
        }
        if self.max_size.is_none() {
            self.max_size = other.max_size;
        }
        if self.min_time_ms.is_none() {
            self.min_time_ms = other.min_time_ms;
        }
        if self.log_level.is_none() {
            self.log_level = other.log_level;
        }
        if self.log_dir.is_none() {
            self.log_dir = other.log_dir;
        }
    }

    /// Merge existing files in order; earlier files win. A file that exists
    /// but does not parse is an error.
    ///
    /// # Errors
    /// `BenchError::Io` for unreadable files, `BenchError::Config` for bad TOML.
    pub fn from_files(paths: &[PathBuf]) -> Result<Self, BenchError> {
        let mut cfg = AppConfig::default();
        for p in paths.iter().filter(|p| p.is_file()) {
            let text = std::fs::read_to_string(p)
                .map_err(|e| BenchError::Io(format!("{}: {e}", p.display())))?;
            let file_cfg = AppConfig::from_toml(&text)?;
            log::debug!("config: loaded {}", p.display());
            cfg.fill_from(file_cfg);
        }
        Ok(cfg)
    }

    /// Let environment values override file values.
    ///
    /// # Errors
    /// `BenchError::Parse` for an unknown `CRLFBENCH_METRIC`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<(), BenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(s) = var("CRLFBENCH_INPUT") {
            self.input = Some(PathBuf::from(s));
        }
        if let Some(s) = var("CRLFBENCH_OUTPUT") {
            self.output = Some(PathBuf::from(s));
        }
        if let Some(s) = var("CRLFBENCH_METRIC") {
            self.metric = Some(s.parse()?);
        }
        Ok(())
    }

    /// Files, then environment. Command-line values are applied by the
    /// caller on top of the result.
    ///
    /// # Errors
    /// See [`AppConfig::from_files`] and [`AppConfig::apply_env`].
    pub fn load(cli_cfg: Option<&Path>) -> Result<Self, BenchError> {
        let mut cfg = AppConfig::from_files(&config_paths(cli_cfg))?;
        cfg.apply_env(|k| std::env::var(k).ok())?;
        Ok(cfg)
    }

    pub fn input(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub fn output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn metric(&self) -> Metric {
        self.metric.unwrap_or_default()
    }

    pub fn offset(&self) -> u8 {
        self.offset.unwrap_or(0)
    }
}
