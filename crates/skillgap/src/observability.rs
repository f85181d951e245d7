//! Logging setup.
//!
//! Two layers share one registry: a compact console layer on stderr and an
//! optional JSONL file layer. The console stays at `warn` unless `-v` or
//! `RUST_LOG` asks for more, so normal output on stdout is never buried.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Environment variable naming an explicit log file.
pub const LOG_PATH_ENV: &str = "SKILLGAP_LOG_PATH";

/// File name used inside a log directory.
const LOG_FILE_NAME: &str = "skillgap.jsonl";

/// Where (and whether) to write the JSONL log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log file path. File logging is off when `None`.
    pub log_path: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from `SKILLGAP_LOG_PATH`, falling back to
    /// `skillgap.jsonl` inside the configured log directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let env_path = std::env::var_os(LOG_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            log_path: resolve_log_path(env_path, log_dir),
        }
    }
}

fn resolve_log_path(env_path: Option<PathBuf>, log_dir: Option<PathBuf>) -> Option<PathBuf> {
    env_path.or_else(|| log_dir.map(|dir| dir.join(LOG_FILE_NAME)))
}

/// Build the global filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` trace, and the configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Ceiling for the console layer.
pub fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return LevelFilter::TRACE;
    }
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Keeps the background log writer alive; drop it to flush.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    console: LevelFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let console_layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console);

    let (file_layer, file_guard) = match config.log_path {
        Some(ref path) => {
            let (dir, name) = split_log_path(path);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: file_guard })
}

fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let name = path
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.to_string(), |n| n.to_string_lossy().into_owned());
    (dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_dir() {
        let resolved = resolve_log_path(
            Some(PathBuf::from("/tmp/explicit.jsonl")),
            Some(PathBuf::from("/var/log/skillgap")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/explicit.jsonl")));
    }

    #[test]
    fn dir_gets_default_file_name() {
        let resolved = resolve_log_path(None, Some(PathBuf::from("/var/log/skillgap")));
        assert_eq!(
            resolved,
            Some(PathBuf::from("/var/log/skillgap/skillgap.jsonl"))
        );
    }

    #[test]
    fn no_path_means_no_file_logging() {
        assert_eq!(resolve_log_path(None, None), None);
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let (dir, name) = split_log_path(Path::new("run.jsonl"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "run.jsonl");
    }
}
