//! Logging and tracing initialization.
//!
//! Human-readable logs go to stderr so stdout stays clean for `--json`
//! output. An optional JSONL file layer activates when a log path or
//! directory is configured, backed by a non-blocking appender whose guard
//! must live for the whole process.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Log file name used inside a configured log directory.
const LOG_FILE_PREFIX: &str = "serp-lint.jsonl";

/// Resolved logging destinations.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`SERP_LINT_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolled JSONL logs (`SERP_LINT_LOG_DIR` or config).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as a fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("SERP_LINT_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("SERP_LINT_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins outright; otherwise `-q` forces errors only and each
/// `-v` raises verbosity above the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

/// Pick the filter directive from the flag combination.
fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// Returns the non-blocking appender's guard when file logging is active;
/// the caller must hold it until exit or buffered lines are lost.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Open the file destination, if one is configured.
fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<(NonBlocking, WorkerGuard)>> {
    if let Some(ref path) = config.log_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        return Ok(Some((writer, guard)));
    }

    if let Some(ref dir) = config.log_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        return Ok(Some((writer, guard)));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_directive(true, 3, "info"), "error");
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(level_directive(false, 1, "info"), "debug");
        assert_eq!(level_directive(false, 2, "info"), "trace");
    }

    #[test]
    fn default_uses_config_level() {
        assert_eq!(level_directive(false, 0, "warn"), "warn");
    }

    #[test]
    fn no_destination_without_config() {
        let config = ObservabilityConfig::default();
        assert!(file_writer(&config).unwrap().is_none());
    }
}
