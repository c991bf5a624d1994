use std::path::Path;
use std::sync::OnceLock;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::errors::BenchError;

/// Target for per-case measurement lines.
pub const METRICS_TARGET: &str = "crlfbench::metrics";

const ROLL_SIZE: u64 = 10 * 1024 * 1024;
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const CONSOLE_PATTERN: &str = "[{l}] {m}{n}";

static HANDLE: OnceLock<log4rs::Handle> = OnceLock::new();

pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn rolling(dir: &Path, stem: &str, keep: u32) -> Result<RollingFileAppender, BenchError> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", dir.join(format!("{stem}.{{}}.log")).display()), keep)
        .map_err(|e| BenchError::Log(e.to_string()))?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(dir.join(format!("{stem}.log")), Box::new(policy))
        .map_err(|e| BenchError::Log(e.to_string()))
}

/// Build the logging config.
/// - dir: when set, also log to `{dir}/crlfbench.log` and route measurement
///   lines to `{dir}/metrics.log`
/// - level: error|warn|info|debug|trace (default info)
/// - retention: number of rolled files to keep (default 7)
pub fn build_config(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<Config, BenchError> {
    let lvl = parse_level(level);
    let keep = u32::try_from(retention.unwrap_or(7)).unwrap_or(u32::MAX);
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let mut builder =
        Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        builder = builder
            .appender(Appender::builder().build("app", Box::new(rolling(dir, "crlfbench", keep)?)))
            .appender(Appender::builder().build("metrics", Box::new(rolling(dir, "metrics", keep)?)))
            .logger(
                Logger::builder()
                    .appender("metrics")
                    .appender("app")
                    .additive(false)
                    .build(METRICS_TARGET, lvl),
            );
        root = root.appender("app");
    }
    builder.build(root.build(lvl)).map_err(|e| BenchError::Log(e.to_string()))
}

/// Configure logging for the process. A second call replaces the active
/// config.
///
/// # Errors
/// `BenchError::Log` if the appenders cannot be built or the global logger
/// is owned by something else.
pub fn configure_logging(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<(), BenchError> {
    let config = build_config(dir, level, retention)?;
    if let Some(handle) = HANDLE.get() {
        handle.set_config(config);
        return Ok(());
    }
    let handle = log4rs::init_config(config).map_err(|e| BenchError::Log(e.to_string()))?;
    let _ = HANDLE.set(handle);
    Ok(())
}

/// Configure logging from environment variables if present:
/// - CRLFBENCH_LOG_DIR
/// - CRLFBENCH_LOG_LEVEL
/// - CRLFBENCH_LOG_RETENTION
pub fn configure_from_env() -> Result<(), BenchError> {
    configure_from_env_or(None, None)
}

/// Like [`configure_from_env`], using `dir` and `level` for variables that
/// are not set.
pub fn configure_from_env_or(dir: Option<&Path>, level: Option<&str>) -> Result<(), BenchError> {
    let env_dir = std::env::var("CRLFBENCH_LOG_DIR").ok().map(std::path::PathBuf::from);
    let env_level = std::env::var("CRLFBENCH_LOG_LEVEL").ok();
    let retention =
        std::env::var("CRLFBENCH_LOG_RETENTION").ok().and_then(|s| s.parse::<usize>().ok());
    configure_logging(env_dir.as_deref().or(dir), env_level.as_deref().or(level), retention)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("warn")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("bogus")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn file_config_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let cfg = build_config(Some(&logs), Some("debug"), Some(3)).unwrap();
        assert!(logs.is_dir());
        assert_eq!(cfg.root().level(), LevelFilter::Debug);
        assert_eq!(cfg.loggers().len(), 1);
        assert_eq!(cfg.appenders().len(), 3);
    }

    #[test]
    fn console_only_without_dir() {
        let cfg = build_config(None, None, None).unwrap();
        assert_eq!(cfg.appenders().len(), 1);
        assert!(cfg.loggers().is_empty());
    }
}
