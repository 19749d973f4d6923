//! Logging initialisation
//!
//! Installs the global `tracing` subscriber with an `EnvFilter` and either
//! human-readable or JSON console output. When a log directory is configured,
//! events are also written to `combined.log` (everything that passes the
//! filter) and `error.log` (errors only) inside it.

use std::path::Path;

use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "cafetale_server=info,presentation_http=info,application=info,integration_places=info,tower_http=info";

/// File receiving every logged event
pub const COMBINED_LOG_FILE: &str = "combined.log";

/// File receiving error events only
pub const ERROR_LOG_FILE: &str = "error.log";

/// Logging setup errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed
    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),

    /// The log directory or a log file could not be opened
    #[error("Failed to open log file {path}: {message}")]
    LogFile { path: String, message: String },
}

/// Keeps the background file writers alive
///
/// Dropping it flushes and closes the log files.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a configured format name, defaulting to text
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Build the level filter from `RUST_LOG` or the default directives
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log_file(dir: &Path, file_name: &str) -> Result<RollingFileAppender, TelemetryError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| TelemetryError::LogFile {
            path: dir.join(file_name).display().to_string(),
            message: e.to_string(),
        })
}

/// Assemble the subscriber without installing it
fn build_subscriber(
    filter: EnvFilter,
    log_format: &str,
    log_dir: Option<&str>,
) -> Result<(impl Subscriber + Send + Sync + 'static, LogGuard), TelemetryError> {
    let (json_layer, text_layer) = match LogFormat::from_name(log_format) {
        LogFormat::Json => (Some(fmt::layer().json().with_current_span(true)), None),
        LogFormat::Text => (None, Some(fmt::layer())),
    };

    let mut guards = Vec::new();
    let file_layer = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            std::fs::create_dir_all(dir).map_err(|e| TelemetryError::LogFile {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;

            let (combined, combined_guard) =
                tracing_appender::non_blocking(open_log_file(dir, COMBINED_LOG_FILE)?);
            let (errors, errors_guard) =
                tracing_appender::non_blocking(open_log_file(dir, ERROR_LOG_FILE)?);
            guards.extend([combined_guard, errors_guard]);

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(combined)
                    .and_then(
                        fmt::layer()
                            .with_ansi(false)
                            .with_writer(errors)
                            .with_filter(LevelFilter::ERROR),
                    ),
            )
        },
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer);

    Ok((subscriber, LogGuard { _guards: guards }))
}

/// Install the global subscriber
///
/// Keep the returned guard for the lifetime of the process; file output
/// stops when it is dropped.
///
/// # Errors
///
/// Returns an error if the log directory cannot be used or a global
/// subscriber is already installed.
pub fn init_tracing(log_format: &str, log_dir: Option<&str>) -> Result<LogGuard, TelemetryError> {
    let (subscriber, guard) = build_subscriber(env_filter(), log_format, log_dir)?;
    subscriber.try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_from_name() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("text"), LogFormat::Text);
        assert_eq!(LogFormat::from_name("anything"), LogFormat::Text);
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn second_init_fails() {
        let _ = init_tracing("text", None);
        assert!(matches!(
            init_tracing("json", None),
            Err(TelemetryError::Init(_))
        ));
    }

    #[test]
    fn file_sink_splits_errors_from_combined() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let (subscriber, guard) =
            build_subscriber(EnvFilter::new("info"), "text", log_dir.to_str()).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("cafe search started");
            tracing::error!("places lookup failed");
        });
        drop(guard);

        let combined = std::fs::read_to_string(log_dir.join(COMBINED_LOG_FILE)).unwrap();
        let errors = std::fs::read_to_string(log_dir.join(ERROR_LOG_FILE)).unwrap();

        assert!(combined.contains("cafe search started"));
        assert!(combined.contains("places lookup failed"));
        assert!(errors.contains("places lookup failed"));
        assert!(!errors.contains("cafe search started"));
    }

    #[test]
    fn file_sink_rejects_unusable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let result = build_subscriber(EnvFilter::new("info"), "text", blocker.to_str());
        assert!(matches!(result, Err(TelemetryError::LogFile { .. })));
    }
}
